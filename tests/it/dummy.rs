// Copyright 2023 Datafuse Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Ordering;
use std::sync::Arc;

use databend_common_column_dummy::*;

#[test]
fn test_construct_and_size() {
    assert_eq!(NothingColumn::default().len(), 0);
    assert_eq!(NothingColumn::new(7).len(), 7);
    assert!(NothingColumn::new(0).is_empty());

    let column = NothingColumn::new(3);
    assert!(column.is_dummy());
    assert_eq!(column.name(), "Nothing");
    assert_eq!(format!("{:?}", column), "Nothing(rows=3)");
    assert_eq!(column.byte_size(), 0);
    assert_eq!(column.byte_size_at(1), 0);
    assert_eq!(column.allocated_bytes(), 0);
}

#[test]
fn test_insert_and_pop() {
    let mut column = NothingColumn::new(2);
    for _ in 0..5 {
        column.insert_default().unwrap();
    }
    assert_eq!(column.len(), 7);

    column.insert_data(b"ignored payload").unwrap();
    column.insert_data(&[]).unwrap();
    assert_eq!(column.len(), 9);

    let other = NothingColumn::new(100);
    column.insert_from(&other, 42).unwrap();
    assert_eq!(column.len(), 10);
    column.insert_range_from(&other, 10, 20).unwrap();
    assert_eq!(column.len(), 30);

    column.add_size(5).unwrap();
    assert_eq!(column.len(), 35);

    column.pop_back(35).unwrap();
    assert_eq!(column.len(), 0);
}

#[test]
fn test_pop_back_underflow() {
    let mut column = NothingColumn::new(2);
    let err = column.pop_back(3).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BAD_ARGUMENTS);
    assert_eq!(column.len(), 2);
}

#[test]
fn test_size_overflow() {
    let mut column = NothingColumn::new(usize::MAX - 1);
    column.insert_default().unwrap();
    assert_eq!(column.len(), usize::MAX);

    let other = NothingColumn::new(2);
    let err = column.insert_default().unwrap_err();
    assert_eq!(err.code(), ErrorCode::BAD_ARGUMENTS);
    let err = column.insert_range_from(&other, 0, 2).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BAD_ARGUMENTS);
    let err = column.insert_from(&other, 0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BAD_ARGUMENTS);
    let err = column.add_size(1).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BAD_ARGUMENTS);
    assert_eq!(column.len(), usize::MAX);

    let mut column = NothingColumn::new(3);
    let err = column.insert_range_from(&other, 0, usize::MAX).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BAD_ARGUMENTS);
    assert_eq!(column.len(), 3);
}

#[test]
fn test_clone_resized() {
    let column = NothingColumn::new(4);
    let resized = column.clone_resized(9);
    assert_eq!(resized.len(), 9);
    assert_eq!(column.len(), 4);
    assert!(resized.structure_equals(&column));
    assert!(resized.as_any().downcast_ref::<NothingColumn>().is_some());

    let empty = column.clone_empty();
    assert_eq!(empty.len(), 0);
}

#[test]
fn test_comparison() {
    let lhs = NothingColumn::new(3);
    let rhs = NothingColumn::new(10);
    for i in 0..3 {
        for j in 0..10 {
            assert_eq!(lhs.compare_at(i, j, &rhs, 1), Ordering::Equal);
            assert_eq!(lhs.compare_at(i, j, &rhs, -1), Ordering::Equal);
        }
    }

    let set = SetColumn::new(4, Arc::new(PreparedSet::from_keys([b"k".as_slice()])));
    for i in 0..3 {
        for j in 0..4 {
            assert_eq!(lhs.compare_at(i, j, &set, 1), Ordering::Equal);
            assert_eq!(set.compare_at(j, i, &lhs, -1), Ordering::Equal);
        }
    }
    assert_eq!(set.compare_at(0, 3, &set, 1), Ordering::Equal);

    assert!(lhs.has_equal_values());
    assert!(NothingColumn::new(0).has_equal_values());

    let mut row_indexes = vec![0u64, 2];
    let mut results = vec![7i8; 3];
    lhs.compare_column(
        &rhs,
        1,
        Some(&mut row_indexes),
        &mut results,
        SortDirection::Ascending,
        1,
    );
    assert_eq!(row_indexes, vec![0, 2]);
    assert_eq!(results, vec![7, 7, 7]);
}

#[test]
fn test_value_access_unimplemented() {
    let mut column = NothingColumn::new(3);
    let mut value = Scalar::Int64(1);

    let err = column.value_at(0).unwrap_err();
    assert_eq!(err, ErrorCode::Unimplemented {
        method: "value_at",
        column: "Nothing".to_string(),
    });
    assert_eq!(
        err.to_string(),
        "Code: 1002, Text = Method value_at is not supported for Nothing."
    );

    assert_eq!(
        column.get(0, &mut value).unwrap_err().code(),
        ErrorCode::UNIMPLEMENTED
    );
    assert_eq!(value, Scalar::Int64(1));
    assert_eq!(
        column.is_default_at(0).unwrap_err().code(),
        ErrorCode::UNIMPLEMENTED
    );
    assert_eq!(
        column.insert(&Scalar::Null).unwrap_err().code(),
        ErrorCode::UNIMPLEMENTED
    );
    assert_eq!(column.len(), 3);

    assert!(column.get_data_at(0).is_empty());
    assert!(column.get_data_at(2).is_empty());
}

#[test]
fn test_analytics_unimplemented() {
    let mut column = NothingColumn::new(3);
    assert_eq!(
        column.get_ratio_of_default_rows(0.5).unwrap_err().code(),
        ErrorCode::UNIMPLEMENTED
    );

    let mut indices = vec![];
    assert_eq!(
        column
            .get_indices_of_non_default_rows(&mut indices, 0, 3)
            .unwrap_err()
            .code(),
        ErrorCode::UNIMPLEMENTED
    );
    assert!(indices.is_empty());

    let sources: Vec<ColumnRef> = vec![Arc::new(NothingColumn::new(2))];
    assert_eq!(
        column.gather(&sources, &[(0, 0, 2)]).unwrap_err().code(),
        ErrorCode::UNIMPLEMENTED
    );
    assert_eq!(column.len(), 3);

    let mut min = Scalar::Null;
    let mut max = Scalar::UInt64(3);
    column.get_extremes(&mut min, &mut max);
    assert_eq!(min, Scalar::Null);
    assert_eq!(max, Scalar::UInt64(3));
}

#[test]
fn test_hash_noop() {
    use std::hash::Hasher;

    let column = NothingColumn::new(4);

    let mut hasher = SipHasher24::new_with_keys(1, 2);
    let before = hasher.finish();
    column.update_hash_with_value(1, &mut hasher);
    column.update_hash_fast(&mut hasher);
    assert_eq!(hasher.finish(), before);

    let mut weak = WeakHash32::new(4);
    column.update_weak_hash32(&mut weak);
    assert_eq!(weak.data(), &[!0u32; 4]);
}

#[test]
fn test_filter() {
    let column = NothingColumn::new(5);
    let filtered = column.filter(&[1, 0, 1, 1, 0], None);
    assert_eq!(filtered.len(), 3);
    assert_eq!(column.len(), 5);

    // Any non-zero byte selects the row.
    let filtered = column.filter(&[0, 2, 0, 255, 0], Some(2));
    assert_eq!(filtered.len(), 2);
}

#[test]
fn test_expand() {
    let mut column = NothingColumn::new(0);
    column.expand(&[1, 0, 1, 1, 0, 0], false);
    assert_eq!(column.len(), 3);

    let mut column = NothingColumn::new(10);
    column.expand(&[1, 0, 1, 1, 0, 0], true);
    assert_eq!(column.len(), 3);

    let mut column = NothingColumn::new(10);
    column.expand(&[0, 0, 0, 1], false);
    assert_eq!(column.len(), 1);

    let mut column = NothingColumn::new(1);
    column.expand(&[0, 0, 0, 1], true);
    assert_eq!(column.len(), 3);

    let mut column = NothingColumn::new(5);
    column.expand(&[], false);
    assert_eq!(column.len(), 0);
}

#[test]
fn test_permute() {
    let column = NothingColumn::new(5);
    let perm = [4, 3, 2, 1, 0];
    assert_eq!(column.permute(&perm, 0).unwrap().len(), 5);
    assert_eq!(column.permute(&perm, 3).unwrap().len(), 3);
    assert_eq!(column.permute(&perm, 10).unwrap().len(), 5);

    let err = column.permute(&[0, 1, 2, 3], 0).unwrap_err();
    assert_eq!(err, ErrorCode::SizeMismatch {
        what: "permutation",
        expected: 5,
        actual: 4,
    });
}

#[test]
fn test_index() {
    let column = NothingColumn::new(5);
    let indexes = NothingColumn::new(3);
    assert_eq!(column.index(&indexes, 0).unwrap().len(), 5);
    assert_eq!(column.index(&indexes, 2).unwrap().len(), 2);
    assert_eq!(column.index(&indexes, 3).unwrap().len(), 3);

    let err = column.index(&indexes, 4).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SIZE_MISMATCH);
}

#[test]
fn test_replicate() {
    let column = NothingColumn::new(3);
    assert_eq!(column.replicate(&[1, 3, 6]).unwrap().len(), 6);
    assert_eq!(column.replicate(&[0, 0, 0]).unwrap().len(), 0);

    let err = column.replicate(&[1, 3]).unwrap_err();
    assert_eq!(err, ErrorCode::SizeMismatch {
        what: "offsets",
        expected: 3,
        actual: 2,
    });

    assert_eq!(NothingColumn::new(0).replicate(&[]).unwrap().len(), 0);
}

#[test]
fn test_scatter() {
    let column = NothingColumn::new(5);
    let scattered = column.scatter(2, &[0, 1, 0, 1, 0]).unwrap();
    assert_eq!(scattered.len(), 2);
    assert_eq!(scattered[0].len(), 3);
    assert_eq!(scattered[1].len(), 2);

    let scattered = column.scatter(4, &[3, 3, 3, 3, 3]).unwrap();
    let sizes: Vec<usize> = scattered.iter().map(|c| c.len()).collect();
    assert_eq!(sizes, vec![0, 0, 0, 5]);

    let err = column.scatter(2, &[0, 1, 0]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SIZE_MISMATCH);

    let err = column.scatter(2, &[0, 1, 2, 0, 0]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BAD_ARGUMENTS);
}

#[test]
fn test_permutation() {
    let column = NothingColumn::new(5);
    let perm = column.get_permutation(SortDirection::Descending, SortStability::Stable, 0, 1);
    assert_eq!(perm, vec![0, 1, 2, 3, 4]);

    let perm = column.get_permutation(SortDirection::Ascending, SortStability::Unstable, 2, -1);
    assert_eq!(perm, vec![0, 1, 2, 3, 4]);

    assert!(
        NothingColumn::new(0)
            .get_permutation(SortDirection::Ascending, SortStability::Stable, 0, 1)
            .is_empty()
    );

    let mut res = vec![4, 2, 0, 1, 3];
    let mut equal_ranges = vec![0..5];
    column.update_permutation(
        SortDirection::Ascending,
        SortStability::Stable,
        0,
        1,
        &mut res,
        &mut equal_ranges,
    );
    assert_eq!(res, vec![4, 2, 0, 1, 3]);
    assert_eq!(equal_ranges, vec![0..5]);
}

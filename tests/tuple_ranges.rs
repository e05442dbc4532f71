use data_range::prelude::*;
use data_range::range;

/// 2 tuples x 3 components
fn setup_vectors() -> AosArray<f32> {
    AosArray::from_vec(vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap()
}

mod reading {
    use super::*;

    #[test]
    fn vector_array_scenario() {
        let array = setup_vectors();
        let tuples = range::tuples(&array);

        assert_eq!(range::values(&array).len(), 6);
        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples.at(1).get(1), 5.0);
        assert_eq!(tuples.at(0).to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn iteration_yields_every_tuple_in_order() {
        let array = setup_vectors();

        let mut seen = Vec::new();
        for tuple in range::tuples(&array) {
            seen.extend(tuple.iter());
        }

        assert_eq!(seen, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn get_tuple_into_caller_buffer() {
        let array = setup_vectors();
        let tuples = range::tuples(&array);

        let mut buffer = [0.0_f32; 3];
        tuples.get_tuple(1, &mut buffer);
        assert_eq!(buffer, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn sub_range_composition() {
        let values: Vec<f32> = (0..30).map(|v| v as f32).collect();
        let array = AosArray::from_vec(values, 3).unwrap();
        let tuples = range::tuples(&array);

        let sub = tuples.sub_range(2, Some(8));
        assert_eq!(sub.len(), 6);
        for offset in 0..sub.len() {
            assert_eq!(sub.at(offset), tuples.at(2 + offset));
        }
    }

    #[test]
    fn equality_is_by_value_across_element_types() {
        let floats = AosArray::from_vec(vec![1.0_f32, 2.0, 3.0], 3).unwrap();
        let bytes = AosArray::from_vec(vec![1_u8, 2, 3], 3).unwrap();
        let other = AosArray::from_vec(vec![1_u8, 2, 4], 3).unwrap();

        let float_tuple = range::tuples(&floats).at(0);

        assert!(float_tuple == range::tuples(&bytes).at(0));
        assert!(float_tuple != range::tuples(&other).at(0));

        // against a plain slice
        assert!(float_tuple == [1.0_f32, 2.0, 3.0].as_slice());
    }

    #[test]
    fn fixed_size_reads() {
        let array = setup_vectors();
        let tuples = range::tuples_fixed::<3, _>(&array);

        let first: [f32; 3] = tuples.at(0).read_array();
        assert_eq!(first, [1.0, 2.0, 3.0]);

        let fast = array.tuples_fixed::<3>();
        assert_eq!(fast.at_array(1), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn slice_tuples_are_plain_subslices() {
        let array = setup_vectors();
        let tuples = array.tuples();

        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples.at(1), &[4.0, 5.0, 6.0]);

        let chunks: Vec<&[f32]> = tuples.iter().collect();
        assert_eq!(chunks, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
    }
}

mod writing {
    use super::*;

    #[test]
    fn swap_scenario() {
        let mut array = setup_vectors();
        let mut tuples = range::tuples_mut(&mut array);

        tuples.swap_tuples(0, 1);

        assert_eq!(tuples.at(0).get(2), 6.0);
        assert_eq!(tuples.at(1).get(2), 3.0);
    }

    #[test]
    fn set_then_get_tuple_is_idempotent() {
        let mut array = setup_vectors();
        let mut tuples = range::tuples_mut(&mut array);

        let buffer = [9.0_f32, 8.0, 7.0];
        tuples.set_tuple(0, &buffer);

        let mut read_back = [0.0_f32; 3];
        tuples.get_tuple(0, &mut read_back);
        assert_eq!(read_back, buffer);
    }

    #[test]
    fn fill_one_tuple() {
        let mut array = setup_vectors();
        let mut tuples = range::tuples_mut(&mut array);

        tuples.at_mut(1).fill(0.5);

        assert_eq!(tuples.at(0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(tuples.at(1).to_vec(), vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn cursor_mutates_every_tuple() {
        let mut array = setup_vectors();

        let mut tuples = range::tuples_mut(&mut array);
        let mut cursor = tuples.cursor();
        while let Some(mut tuple) = cursor.next() {
            let first = tuple.get(0);
            tuple.set(0, first * 100.0);
        }

        assert_eq!(array.into_vec(), vec![100.0, 2.0, 3.0, 400.0, 5.0, 6.0]);
    }

    #[test]
    fn assignment_converts_with_as_cast_semantics() {
        let source = AosArray::from_vec(vec![2.9_f64, -2.9, 300.0], 3).unwrap();
        let mut target = AosArray::from_vec(vec![0_u8, 0, 0], 3).unwrap();

        range::tuples_mut(&mut target)
            .at_mut(0)
            .assign_from(&range::tuples(&source).at(0));

        // truncation toward zero, then saturation at the destination bounds
        assert_eq!(target.into_vec(), vec![2, 0, 255]);
    }

    #[test]
    fn cross_array_swap_converts_both_ways() {
        let mut floats = AosArray::from_vec(vec![1.5_f64, 2.5], 2).unwrap();
        let mut ints = AosArray::from_vec(vec![10_i32, 20], 2).unwrap();

        let mut float_tuples = range::tuples_mut(&mut floats);
        let mut int_tuples = range::tuples_mut(&mut ints);

        float_tuples
            .at_mut(0)
            .swap_with(&mut int_tuples.at_mut(0));

        assert_eq!(floats.into_vec(), vec![10.0, 20.0]);
        // 1.5 and 2.5 truncate on the way into the integer array
        assert_eq!(ints.into_vec(), vec![1, 2]);
    }

    #[test]
    fn fixed_size_writes() {
        let mut array = setup_vectors();

        range::tuples_fixed_mut::<3, _>(&mut array)
            .at_mut(0)
            .write_array([7.0, 8.0, 9.0]);

        let mut fast = array.tuples_fixed_mut::<3>();
        fast.write_array(1, [1.0, 1.0, 1.0]);

        assert_eq!(array.into_vec(), vec![7.0, 8.0, 9.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn disjoint_sub_range_writes_match_sequential_writes() {
        // 100 tuples x 2 components written in 4 disjoint chunks of 25
        let mut chunked = AosArray::<i64>::zeros(100, 2);
        let mut whole = AosArray::<i64>::zeros(100, 2);

        let mut tuples = range::tuples_mut(&mut chunked);
        for worker in 0..4_i64 {
            let mut part = tuples.sub_range_mut(worker as usize * 25, Some((worker as usize + 1) * 25));
            let mut cursor = part.cursor();
            let mut index = worker * 25;
            while let Some(mut tuple) = cursor.next() {
                tuple.set(0, index);
                tuple.set(1, -index);
                index += 1;
            }
        }

        let mut tuples = range::tuples_mut(&mut whole);
        for index in 0..100_i64 {
            tuples.set_tuple(index as usize, &[index, -index]);
        }

        assert_eq!(chunked, whole);
    }

    #[test]
    fn parallel_partition_over_slice_tuples() {
        let mut array = AosArray::<f32>::zeros(100, 3);

        let (mut left, mut right) = array.tuples_mut().split_at_mut(50);

        std::thread::scope(|scope| {
            scope.spawn(|| left.fill(1.0));
            scope.spawn(|| right.fill(2.0));
        });

        let tuples = array.tuples();
        assert_eq!(tuples.at(49), &[1.0, 1.0, 1.0]);
        assert_eq!(tuples.at(50), &[2.0, 2.0, 2.0]);
    }

    #[test]
    fn slice_tuple_swap_and_set() {
        let mut array = setup_vectors();
        let mut tuples = array.tuples_mut();

        tuples.swap_tuples(0, 1);
        tuples.set_tuple(1, &[0.0, 0.0, 0.0]);
        tuples.at_mut(0)[1] = 50.0;

        assert_eq!(array.into_vec(), vec![4.0, 50.0, 6.0, 0.0, 0.0, 0.0]);
    }
}

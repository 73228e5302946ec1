use containers::array::Array;
use containers::Error;
use quickcheck_macros::quickcheck;

fn build(xs: &[i8]) -> Array {
    xs.iter().map(|x| i32::from(*x)).collect()
}

#[quickcheck]
fn quick_sort_matches_std(xs: Vec<i8>) -> bool {
    let mut array = build(&xs);
    array.quick_sort();

    let mut sorted = xs.iter().map(|x| i32::from(*x)).collect::<Vec<_>>();
    sorted.sort_unstable();
    array == sorted
}

#[quickcheck]
fn search_sorted_finds_present_values(xs: Vec<i8>, x: i8) -> bool {
    let mut array = build(&xs);
    array.quick_sort();

    let index = array.search_sorted(x.into());
    if xs.contains(&x) {
        array.get(index) == i32::from(x)
    } else {
        index == array.len()
    }
}

#[quickcheck]
fn search_sorted_agrees_with_search_on_distinct_values(xs: Vec<i8>, x: i8) -> bool {
    let mut xs = xs;
    xs.sort_unstable();
    xs.dedup();
    let array = build(&xs);

    array.is_sorted() && array.search_sorted(x.into()) == array.search(x.into())
}

#[quickcheck]
fn partition_splits_around_the_pivot(xs: Vec<i8>, i: u8, j: u8) -> bool {
    let mut array = build(&xs);
    let (i, j) = (usize::from(i), usize::from(j));

    match array.partition(i, j) {
        Ok(l) => {
            let pivot = array.get(l);
            i <= l
                && l <= j
                && (i..l).all(|k| array.get(k) < pivot)
                && (l + 1..=j).all(|k| array.get(k) >= pivot)
        }
        Err(Error::InvalidRange { .. }) => i > j || j >= xs.len(),
        Err(_) => false,
    }
}

#[quickcheck]
fn heap_top_is_the_maximum(xs: Vec<i8>) -> bool {
    let mut heap = Array::new();
    for x in &xs {
        if heap.heap_add((*x).into()).is_err() {
            return false;
        }
    }

    heap.is_heap() && heap.heap_top().ok() == xs.iter().max().map(|x| i32::from(*x))
}

#[quickcheck]
fn pop_back_returns_pushes_in_reverse(xs: Vec<i8>) -> bool {
    let mut array = Array::new();
    for x in &xs {
        array.push_back((*x).into());
    }

    let popped = std::iter::from_fn(|| array.pop_back().ok()).collect::<Vec<_>>();
    let expected = xs.iter().rev().map(|x| i32::from(*x)).collect::<Vec<_>>();
    popped == expected
        && array.is_empty()
        && array.pop_back() == Err(Error::Empty)
}

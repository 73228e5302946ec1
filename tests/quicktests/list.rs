use containers::list::List;
use containers::Error;
use quickcheck_macros::quickcheck;

fn build(xs: &[i8]) -> List {
    xs.iter().map(|x| i32::from(*x)).collect()
}

#[quickcheck]
fn merge_sort_matches_std(xs: Vec<i8>) -> bool {
    let mut list = build(&xs);
    list.merge_sort();

    let mut sorted = xs.iter().map(|x| i32::from(*x)).collect::<Vec<_>>();
    sorted.sort();
    list == sorted
}

#[quickcheck]
fn split_keeps_the_order(xs: Vec<i8>) -> bool {
    let mut list = build(&xs);
    let mut out1 = List::new();
    let mut out2 = List::new();
    list.split(&mut out1, &mut out2);

    let (front, back) = xs.split_at(xs.len() - xs.len() / 2);
    list.is_empty() && out1 == build(front) && out2 == build(back)
}

#[quickcheck]
fn merge_rejects_unsorted_input(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut in1 = build(&xs);
    let mut in2 = build(&ys);
    let mut out = List::new();

    let sorted = in1.is_sorted() && in2.is_sorted();
    match out.merge(&mut in1, &mut in2) {
        Ok(()) => sorted && in1.is_empty() && in2.is_empty() && out.len() == xs.len() + ys.len(),
        Err(Error::NotSorted) => !sorted && out.is_empty() && in1 == build(&xs) && in2 == build(&ys),
        Err(_) => false,
    }
}

#[quickcheck]
fn remove_what_was_inserted(xs: Vec<i8>, x: i8, index: u8) -> bool {
    let mut list = build(&xs);
    let index = usize::from(index);

    let consistent = match list.insert(x.into(), index) {
        Ok(()) => list.get(index) == i32::from(x) && list.remove(index) == Ok(x.into()),
        Err(Error::IndexOutOfBounds { .. }) => index > xs.len(),
        Err(_) => false,
    };
    consistent && list == build(&xs)
}

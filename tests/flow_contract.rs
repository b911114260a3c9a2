mod util;

use flowseq::prelude::*;
use util::{Recorder, VecSeq, seq};

#[test]
fn empty_sources_answer_vacuously() {
    let rec = Recorder::<i32>::new();
    let empty_vec: Vec<i32> = Vec::new();
    let empty_seq: VecSeq<i32> = seq(&[]);
    let none: Opt<i32> = Opt::none();

    assert!(!empty_vec.any_match(rec.wrap(|_| true)));
    assert!(empty_vec.all_match(rec.wrap(|_| false)));
    assert!(empty_vec.none_match(rec.wrap(|_| true)));
    assert!(!empty_seq.any_match(rec.wrap(|_| true)));
    assert!(empty_seq.all_match(rec.wrap(|_| false)));
    assert!(none.none_match(rec.wrap(|_| true)));
    assert!(rec.seen().is_empty());
}

#[test]
fn quantifiers_stop_at_the_deciding_element() {
    let data = seq(&[2, 4, 5, 6, 7]);
    let rec = Recorder::<i32>::new();

    assert!(data.any_match(rec.wrap(|x| x % 2 == 1)));
    assert_eq!(rec.seen(), vec![2, 4, 5]);

    rec.clear();
    assert!(!data.all_match(rec.wrap(|x| x % 2 == 0)));
    assert_eq!(rec.seen(), vec![2, 4, 5]);

    rec.clear();
    assert!(!data.none_match(rec.wrap(|x| *x > 3)));
    assert_eq!(rec.seen(), vec![2, 4]);
}

#[test]
fn universal_quantifier_fails_on_a_failing_last_element() {
    let data = vec![2, 4, 7];
    assert!(!data.all_match(|x| x % 2 == 0));
    assert!(!data.none_match(|x| *x == 7));
}

#[test]
fn contains_is_structural() {
    let words = seq(&[String::from("cone"), String::from("star")]);
    assert!(words.contains(&String::from("star")));
    assert!(!words.contains(&String::from("closure")));

    let generated = generate(|| (0..5).map(|n| n * 3));
    assert!(generated.contains(&12));
    assert!(!generated.contains(&13));
}

#[test]
fn fold_left_nests_to_the_left() {
    let data = seq(&["a", "b", "c"]);
    let nested = data.fold_left(String::from("0"), |acc, x| format!("({acc}+{x})"));
    assert_eq!(nested, "(((0+a)+b)+c)");
    assert_eq!(seq::<&str>(&[]).fold_left(String::from("0"), |_, _| unreachable!()), "0");
}

#[test]
fn collect_sizes_the_container_from_the_count() {
    let data = vec![1, 2, 3];
    let mut hint_seen = None;
    let out = data
        .collect(
            |hint| {
                hint_seen = Some(hint);
                Vec::with_capacity(hint as usize)
            },
            |acc: &mut Vec<i32>, x| acc.push(*x),
        )
        .unwrap();
    assert_eq!(out, vec![1, 2, 3]);
    assert_eq!(hint_seen, Some(3));

    let joined = generate(|| ["x", "y"])
        .collect(|_| String::new(), |acc: &mut String, s| acc.push_str(s))
        .unwrap();
    assert_eq!(joined, "xy");
}

#[test]
fn consumer_errors_propagate_unmodified() {
    #[derive(Debug, PartialEq)]
    struct Rejected(i32);

    let data = seq(&[1, 2, 3]);
    let res = data.try_all_match(|x| if *x < 3 { Ok(true) } else { Err(Rejected(*x)) });
    assert_eq!(res, Err(Rejected(3)));

    let res: Result<i32, Rejected> = data.try_fold_left(0, |acc, x| Ok(acc + x));
    assert_eq!(res, Ok(6));

    let res = Opt::some(9).try_any_match(|x| Err::<bool, _>(Rejected(*x)));
    assert_eq!(res, Err(Rejected(9)));
}

fn summary<S: Flow + ?Sized>(source: &S) -> (usize, bool) {
    (Foldable::count(source), source.any_match(|_| true))
}

#[test]
fn every_source_satisfies_the_same_contract() {
    let v = vec![1u8, 2, 3];
    assert_eq!(summary(&v), (3, true));
    assert_eq!(summary(&v[..1]), (1, true));
    assert_eq!(summary(&seq(&[1u8, 2])), (2, true));
    assert_eq!(summary(&Opt::some(1u8)), (1, true));
    assert_eq!(summary(&Opt::<u8>::none()), (0, false));
    assert_eq!(summary(&generate(|| 0..4)), (4, true));
}

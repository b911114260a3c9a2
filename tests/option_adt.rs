use std::collections::HashSet;

use flowseq::prelude::*;

#[test]
fn value_of_some_and_fallback_of_none() {
    assert_eq!(Opt::some(41).value(), Ok(&41));
    assert_eq!(Opt::none().or_else(41), 41);
    assert_eq!(Opt::some(20).map(|x| x * 2 + 1).value(), Ok(&41));
    assert_eq!(Opt::<i32>::none().value(), Err(FlowError::ElementAbsent));
}

#[test]
fn filter_keeps_exactly_the_matching_value() {
    for x in -3..=3 {
        let kept = Opt::some(x).filter(|v| *v > 0);
        assert_eq!(kept.is_present(), x > 0);
        assert!(Opt::<i32>::none().filter(|_| true).is_empty());
    }
}

#[test]
fn flat_map_takes_the_first_produced_value() {
    let parsed = Opt::some("7,8,9").flat_map(|s| s.split(',').map(|p| p.parse::<u8>()));
    assert_eq!(parsed, Opt::some(Ok(7)));
    let nothing = Opt::some("").flat_map(|s| s.split_terminator(','));
    assert!(nothing.is_empty());
}

#[test]
fn chaining_reads_like_a_pipeline() {
    let mut log = Vec::new();
    let port = Opt::from_nullable(Some("8443"))
        .peek(|raw| log.push(format!("raw={raw}")))
        .flat_map(|raw| raw.parse::<u16>().ok())
        .filter(|p| *p >= 1024)
        .or_with(|| Opt::some(8080))
        .or_else_throw();
    assert_eq!(port, Ok(8443));
    assert_eq!(log, vec!["raw=8443"]);

    let fallback = Opt::from_nullable(Some("80"))
        .flat_map(|raw| raw.parse::<u16>().ok())
        .filter(|p| *p >= 1024)
        .or(Opt::some(8080));
    assert_eq!(fallback, Opt::some(8080));
}

#[test]
fn if_present_and_match_with_are_total() {
    let mut hits = 0;
    Opt::some(()).if_present(|_| hits += 1);
    Opt::<()>::none().if_present(|_| hits += 1);
    assert_eq!(hits, 1);

    let describe = |o: Opt<u8>| o.match_with(|v| format!("some {v}"), || "none".to_string());
    assert_eq!(describe(Opt::some(3)), "some 3");
    assert_eq!(describe(Opt::none()), "none");
}

#[test]
fn options_hash_and_compare_by_value() {
    let set: HashSet<Opt<&str>> = [Opt::some("a"), Opt::none(), Opt::some("a"), Opt::none()]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Opt::none()));
    assert_eq!(Opt::<u8>::default(), Opt::none());
}

#[test]
fn option_is_a_flow_source() {
    let some = Opt::some(5);
    assert!(some.contains(&5));
    assert!(!some.contains(&6));
    assert_eq!(Foldable::count(&some), 1);
    assert_eq!(some.fold_left(1, |acc, x| acc * x), 5);
    let visited: Vec<_> = some.traverser().values().collect();
    assert_eq!(visited, vec![&5]);
    let copied = some
        .collect(|hint| Vec::with_capacity(hint as usize), |v: &mut Vec<i32>, x| v.push(*x))
        .unwrap();
    assert_eq!(copied, vec![5]);
}

#[test]
fn conversions_round_trip_through_std_option() {
    let std_some: Option<char> = Opt::some('z').into();
    assert_eq!(std_some, Some('z'));
    assert_eq!(Opt::from(std_some), Opt::some('z'));
    let total: i32 = Opt::some(3).into_iter().chain(Opt::none()).sum();
    assert_eq!(total, 3);
}

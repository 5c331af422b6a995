use fsa::{Automaton, Fsa, SubsetConfig};

/// Thompson-style automaton for `(a|b)*abb`.
fn abb() -> Fsa {
    let mut nfa = Fsa::new();
    for id in 0..=10 {
        nfa.add_state(id, id == 0, id == 10).unwrap();
    }
    for &(from, to) in &[(0, 1), (0, 7), (1, 2), (1, 4), (3, 6), (5, 6), (6, 1), (6, 7)] {
        nfa.add_epsilon(&from, &to).unwrap();
    }
    for &(from, to, symbol) in &[(2, 3, 'a'), (4, 5, 'b'), (7, 8, 'a'), (8, 9, 'b'), (9, 10, 'b')] {
        nfa.add_transition(&from, &to, Some(symbol)).unwrap();
    }
    nfa
}

const WORDS: &[(&str, bool)] = &[
    ("abb", true),
    ("aabb", true),
    ("babb", true),
    ("ababb", true),
    ("ab", false),
    ("aa", false),
    ("", false),
    ("abba", false),
    ("c", false),
];

#[test]
fn closure_and_next() {
    let nfa = abb();
    let closure = nfa.closure(&3).unwrap();
    insta::assert_snapshot!(nfa.display_set(&closure), @"{1,2,3,4,6,7}");
    let next = nfa.next(&4, &'b').unwrap();
    insta::assert_snapshot!(nfa.display_set(&next), @"{1,2,4,5,6,7}");
    assert_eq!(nfa.closure(&0).unwrap().to_string(), "{0,1,2,4,7}");
}

#[test]
fn nfa_accepts_the_language() {
    let nfa = abb();
    assert!(!nfa.deterministic());
    for &(word, expected) in WORDS {
        assert_eq!(nfa.accepts(word.chars()), expected, "{:?}", word);
    }
}

#[test]
fn dfa_is_deterministic_and_equivalent() {
    let nfa = abb();
    let dfa = nfa.to_dfa().unwrap();
    assert!(dfa.deterministic());
    for &(word, expected) in WORDS {
        assert_eq!(dfa.accepts(word.chars()), expected, "{:?}", word);
    }
}

#[test]
fn dfa_has_the_textbook_shape() {
    let result = abb().powerset_construction(&SubsetConfig::default()).unwrap();
    let subsets: Vec<String> = result.subsets.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        subsets,
        vec![
            "{0,1,2,4,7}",
            "{1,2,3,4,6,7,8}",
            "{1,2,4,5,6,7}",
            "{1,2,4,5,6,7,9}",
            "{1,2,4,5,6,7,10}",
        ]
    );

    let mut table = String::new();
    for t in result.dfa.transitions() {
        let symbol = t.symbol.copied().unwrap_or('ε');
        table.push_str(&format!("{} -{}-> {}\n", t.from, symbol, t.to));
    }
    insta::assert_snapshot!(table, @r"
    0 -a-> 1
    0 -b-> 2
    1 -a-> 1
    1 -b-> 3
    2 -a-> 1
    2 -b-> 2
    3 -a-> 1
    3 -b-> 4
    4 -a-> 1
    4 -b-> 2
    ");
    assert!(result.dfa.is_accepting(&4));
    assert_eq!(result.dfa.labels().filter(|&&s| result.dfa.is_accepting(&s)).count(), 1);
}

#[test]
fn frozen_dfa_agrees() {
    let table = abb().to_dfa().unwrap().freeze().unwrap();
    for &(word, expected) in WORDS {
        assert_eq!(table.accepts(word.chars()), expected, "{:?}", word);
    }
    let input: Vec<char> = "babbabbx".chars().collect();
    assert_eq!(table.prefixes(&input).collect::<Vec<_>>(), vec![4, 7]);
    assert_eq!(abb().longest_prefix(&input), Some(7));
}

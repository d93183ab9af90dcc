use plendict_reader::{find, normalize};

const FRUIT: [&str; 4] = ["apple", "application", "banana", "cat"];

#[test]
fn stops_where_shared_prefix_shrinks() {
    assert_eq!(find(FRUIT, "appz"), 1);
}

#[test]
fn first_full_prefix_match_wins() {
    assert_eq!(find(FRUIT, "app"), 0);
    assert_eq!(find(FRUIT, "APPLI"), 1);
    assert_eq!(find(FRUIT, "cat"), 3);
}

#[test]
fn falls_back_to_last_word() {
    assert_eq!(find(["a", "ab", "abc"], "abcd"), 2);
    assert_eq!(find(FRUIT, "zebra"), 3);
}

#[test]
fn empty_inputs_yield_zero() {
    assert_eq!(find(Vec::<&str>::new(), "apple"), 0);
    assert_eq!(find(FRUIT, ""), 0);
    assert_eq!(find(FRUIT, " -./"), 0);
}

#[test]
fn query_and_words_are_normalized() {
    let words = ["AT&T", "New York", "newt"];
    assert_eq!(find(words, "new y"), 1);
    assert_eq!(find(words, "ata"), 0);
    assert_eq!(find(words, "NEWT"), 2);
}

#[test]
fn normalize_folds_and_strips() {
    assert_eq!(normalize("U.S.A."), "usa");
    assert_eq!(normalize("AT&T"), "atat");
    assert_eq!(normalize("well-known / known"), "wellknownknown");
    assert_eq!(normalize("ŻÓŁW"), "żółw");
    assert_eq!(normalize("rock'n'roll"), "rock'n'roll");
}

#[test]
fn normalize_case_folds_fully() {
    assert_eq!(normalize("Straße"), "strasse");
    assert_eq!(normalize("STRASSE"), "strasse");
    assert_eq!(normalize("ΣΟΦΟΣ"), normalize("σοφος"));
    assert_eq!(normalize("σοφος"), "σοφοσ");
    assert_eq!(normalize("\u{fb01}le"), "file");
}

#[test]
fn folded_query_matches_folded_word() {
    assert_eq!(find(["abc", "straße", "strict", "zoo"], "strasse"), 1);
    assert_eq!(find(["abc", "strasse", "zoo"], "Straß"), 1);
}

#[test]
fn normalize_composes() {
    assert_eq!(normalize("e\u{301}t\u{e9}"), "\u{e9}t\u{e9}");
    assert_eq!(normalize("Z\u{307}"), "ż");
}

#[test]
fn normalize_is_idempotent() {
    for input in ["Apple", "U.S.A.", "AT&T", "e\u{301}", "ŻÓŁW", "a - b", "", "ß", "İstanbul"] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input {:?}", input);
    }
}

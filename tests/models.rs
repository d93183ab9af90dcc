use plendict_reader::{DictError, Dictionary, Engine, EngineKind, Language, Sap, Ydp};

#[test]
fn language_parses_codes_and_names() {
    assert_eq!("eng-pol".parse::<Language>().ok(), Some(Language::EngToPol));
    assert_eq!("POL-ENG".parse::<Language>().ok(), Some(Language::PolToEng));
    assert_eq!("Polish to English".parse::<Language>().ok(), Some(Language::PolToEng));
    assert_eq!(Language::EngToPol.to_string(), "eng-pol");

    match "deu-pol".parse::<Language>() {
        Err(DictError::UnsupportedLanguage(name)) => assert_eq!(name, "deu-pol"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn engine_kind_round_trips_through_names() {
    for kind in EngineKind::ALL {
        assert_eq!(kind.to_string().parse::<EngineKind>().ok(), Some(kind));
    }
    let err = "mdx".parse::<EngineKind>().expect_err("unknown engine");
    assert!(matches!(err, DictError::InvalidFormat(_)));
}

#[test]
fn engines_name_their_files() {
    let sap = Sap::files(Language::PolToEng).expect("sap pol-eng");
    assert_eq!(sap.names(), ["dvp_2.dic"]);
    let ydp = Ydp::files(Language::EngToPol).expect("ydp eng-pol");
    assert_eq!(ydp.names(), ["DICT100.DAT", "DICT100.IDX"]);
}

#[test]
fn fresh_handles_are_empty() {
    for kind in EngineKind::ALL {
        let dict = Dictionary::new(kind);
        assert_eq!(dict.engine(), kind);
        assert!(dict.is_empty());
        assert_eq!(dict.language(), None);
        assert_eq!(dict.word(0), None);
        assert_eq!(dict.find("anything"), 0);
        for language in Language::ALL {
            assert!(dict.supported(language));
        }
    }
}

use tonemap::alphabet::{SYMBOLS, START_SYMBOL};
use tonemap::generator::CYCLIC_OFFSET;
use tonemap::Profile;

#[test]
fn alphabet_is_fixed() {
    assert_eq!(SYMBOLS.len(), 78);
    assert_eq!(SYMBOLS[0], 'a');
    assert_eq!(SYMBOLS[25], 'z');
    assert_eq!(SYMBOLS[76], ' ');
    assert_eq!(SYMBOLS[77], START_SYMBOL);

    let mut seen = std::collections::HashSet::new();
    assert!(SYMBOLS.iter().all(|s| seen.insert(s)));
}

#[test]
fn ladder_has_two_spare_bands() {
    let schema = Profile::Cyclic.build().unwrap();
    assert_eq!(schema.valid_hz.len(), SYMBOLS.len() + 2);
    assert_eq!(schema.valid_hz[0], 3000);
    assert!(schema.valid_hz.windows(2).all(|w| w[1] == w[0] + 50));
}

#[test]
fn map_covers_alphabet_in_order() {
    let schema = Profile::Cyclic.build().unwrap();
    assert_eq!(schema.frequency_map.len(), SYMBOLS.len());
    let keys: Vec<char> = schema.frequency_map.iter().map(|(s, _)| s).collect();
    assert_eq!(keys, SYMBOLS.to_vec());
}

#[test]
fn pairs_follow_cyclic_offset() {
    let schema = Profile::Cyclic.build().unwrap();
    let ladder = &schema.valid_hz;
    for (i, &symbol) in SYMBOLS.iter().enumerate() {
        let tones = schema.frequency_map.get(symbol).unwrap();
        assert_eq!(tones.len(), 2);
        assert_eq!(tones[0], ladder[i]);
        assert_eq!(tones[1], ladder[(i + CYCLIC_OFFSET) % ladder.len()]);
    }
}

#[test]
fn known_pairs() {
    let schema = Profile::Cyclic.build().unwrap();
    assert_eq!(schema.frequency_map.get('a').unwrap(), &[3000, 4500]);
    assert_eq!(schema.frequency_map.get('~').unwrap(), &[6850, 4350]);
}

#[test]
fn start_marker_is_tilde() {
    let schema = Profile::Cyclic.build().unwrap();
    assert_eq!(schema.start, '~');
}

#[test]
fn document_has_exactly_four_fields() {
    let json = Profile::Cyclic.build().unwrap().to_json_line().unwrap();
    assert!(!json.contains('\n'));

    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = doc.as_object().unwrap();
    assert_eq!(object.len(), 4);
    for field in ["alphabet", "start", "frequencyMap", "valid_hz"] {
        assert!(object.contains_key(field), "missing {field}");
    }

    // emitted field order matches the document layout
    let alphabet = json.find("\"alphabet\"").unwrap();
    let start = json.find("\"start\"").unwrap();
    let map = json.find("\"frequencyMap\"").unwrap();
    let ladder = json.find("\"valid_hz\"").unwrap();
    assert!(alphabet < start && start < map && map < ladder);
}

#[test]
fn generation_is_deterministic() {
    let first = Profile::Cyclic.build().unwrap().to_json_line().unwrap();
    let second = Profile::Cyclic.build().unwrap().to_json_line().unwrap();
    assert_eq!(first, second);
}

use dammsum::domain::Digit;
use dammsum::polynomial::supported_field_sizes;
use dammsum::{ChecksumEngine, DammError};

fn synthetic_words(k: u32) -> Vec<String> {
    (0..1usize << k).map(|i| format!("word{:05}", i)).collect()
}

fn abcd() -> Vec<String> {
    vec!["A".into(), "B".into(), "C".into(), "D".into()]
}

#[test]
fn test_construct_every_small_field() {
    for k in supported_field_sizes().take_while(|&k| k <= 12) {
        let engine = ChecksumEngine::new(k, 4, synthetic_words(k)).unwrap();
        assert_eq!(engine.field_exponent().get(), k);
        assert_eq!(engine.alphabet().len(), 1 << k);
        assert_eq!(engine.checked_len(), 5);
    }
}

#[test]
fn test_invalid_field_size() {
    assert_eq!(
        ChecksumEngine::new(1, 4, vec!["a".into(), "b".into()]).unwrap_err(),
        DammError::InvalidFieldSize(1)
    );
    assert_eq!(
        ChecksumEngine::new(33, 4, abcd()).unwrap_err(),
        DammError::InvalidFieldSize(33)
    );
}

#[test]
fn test_invalid_payload_size() {
    assert_eq!(
        ChecksumEngine::new(2, 0, abcd()).unwrap_err(),
        DammError::InvalidPayloadSize(0)
    );
}

#[test]
fn test_field_size_checked_before_payload_size() {
    assert_eq!(
        ChecksumEngine::new(40, 0, abcd()).unwrap_err(),
        DammError::InvalidFieldSize(40)
    );
}

#[test]
fn test_wrong_size_alphabet() {
    let err = ChecksumEngine::new(3, 4, abcd()).unwrap_err();
    assert_eq!(
        err,
        DammError::DuplicateOrWrongSizeAlphabet {
            expected: 8,
            actual: 4,
            duplicate: None
        }
    );
}

#[test]
fn test_duplicate_alphabet() {
    let words = vec!["A".into(), "B".into(), "A".into(), "D".into()];
    let err = ChecksumEngine::new(2, 4, words).unwrap_err();
    assert_eq!(
        err,
        DammError::DuplicateOrWrongSizeAlphabet {
            expected: 4,
            actual: 4,
            duplicate: Some("A".into())
        }
    );
}

#[test]
fn test_worked_example() {
    let engine = ChecksumEngine::new(2, 2, abcd()).unwrap();
    assert_eq!(engine.checksum(&["A", "B"], false).unwrap(), "C");
    assert!(engine.verify(&["A", "B", "C"]).unwrap());
    assert!(!engine.verify(&["B", "A", "C"]).unwrap());
    assert!(!engine.verify(&["A", "B", "D"]).unwrap());
}

#[test]
fn test_checksum_with_included_checksum_is_zero_word() {
    let engine = ChecksumEngine::new(2, 2, abcd()).unwrap();
    assert_eq!(engine.checksum(&["A", "B", "C"], true).unwrap(), engine.zero_word());
}

#[test]
fn test_wrong_sequence_lengths() {
    let engine = ChecksumEngine::new(2, 2, abcd()).unwrap();
    assert_eq!(
        engine.checksum(&["A", "B", "C"], false).unwrap_err(),
        DammError::WrongSequenceLength {
            expected: 2,
            actual: 3
        }
    );
    assert_eq!(
        engine.checksum(&["A", "B"], true).unwrap_err(),
        DammError::WrongSequenceLength {
            expected: 3,
            actual: 2
        }
    );
    assert_eq!(
        engine.verify(&["A"]).unwrap_err(),
        DammError::WrongSequenceLength {
            expected: 3,
            actual: 1
        }
    );
}

#[test]
fn test_unknown_symbol() {
    let engine = ChecksumEngine::new(2, 2, abcd()).unwrap();
    assert_eq!(
        engine.checksum(&["A", "E"], false).unwrap_err(),
        DammError::UnknownSymbol {
            position: 1,
            symbol: "E".into()
        }
    );
    // Membership is exact: no case folding or trimming
    assert!(engine.verify(&["a", "B", "C"]).is_err());
}

#[test]
fn test_digit_lookup() {
    let engine = ChecksumEngine::new(2, 2, abcd()).unwrap();
    let d = engine.digit_of("C").unwrap();
    assert_eq!(d.value(), 2);
    assert_eq!(engine.word(d), Some("C"));
    assert!(engine.digit_of("Z").is_none());
}

#[test]
fn test_word_outside_alphabet_is_none() {
    let engine = ChecksumEngine::new(2, 2, abcd()).unwrap();
    assert_eq!(engine.word(Digit::new(3)), Some("D"));
    assert_eq!(engine.word(Digit::new(4)), None);
    assert_eq!(engine.word(Digit::new(9)), None);
    assert_eq!(engine.word(Digit::new(u64::MAX)), None);
}

#[test]
fn test_k11_round_trip_all_zero_payload() {
    let engine = ChecksumEngine::new(11, 12, synthetic_words(11)).unwrap();
    let payload = vec![engine.zero_word().to_string(); 12];
    // Folding zeros never leaves zero
    assert_eq!(engine.checksum(&payload, false).unwrap(), engine.zero_word());
    let mut checked = payload.clone();
    checked.push(engine.zero_word().to_string());
    assert!(engine.verify(&checked).unwrap());
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(ChecksumEngine::new(8, 6, synthetic_words(8)).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let seed = engine.generate();
                engine.verify(&seed).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

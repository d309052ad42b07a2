use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn show_with(phrase_count: usize, center: Option<&str>) -> Show {
    Show {
        id: 3,
        show_title: "Jeopardy!".to_string(),
        game_title: None,
        center_square: center.map(str::to_string),
        phrases: (1..=phrase_count).map(|n| format!("phrase {n}")).collect(),
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn layout_size_bounds() {
    assert!(CardLayout::new(3, true).is_ok());
    assert!(CardLayout::new(9, false).is_ok());
    assert_eq!(CardLayout::new(2, true), Err(CardError::InvalidSize(2)));
    assert_eq!(CardLayout::new(10, true), Err(CardError::InvalidSize(10)));
}

#[test]
fn required_phrases_cases() {
    let five = CardLayout::default();
    let four = CardLayout::new(4, true).unwrap();
    let bare = CardLayout::new(5, false).unwrap();

    assert_eq!(required_phrases(&show_with(0, None), &five), 24);
    assert_eq!(required_phrases(&show_with(0, Some("Center")), &five), 24);
    assert_eq!(required_phrases(&show_with(0, None), &bare), 25);
    assert_eq!(required_phrases(&show_with(0, Some("Center")), &bare), 24);
    // Even sizes have no middle cell.
    assert_eq!(required_phrases(&show_with(0, Some("Center")), &four), 16);
    // A blank center phrase counts as absent.
    assert_eq!(required_phrases(&show_with(0, Some("  ")), &bare), 25);
}

#[test]
fn phrase_pool_normalizes() {
    let mut show = show_with(0, Some("Daily Double"));
    show.phrases = vec![
        " Final Jeopardy ".to_string(),
        "".to_string(),
        "Daily Double".to_string(),
        "Final Jeopardy".to_string(),
        "Triple stumper".to_string(),
    ];
    assert_eq!(
        phrase_pool(&show, &CardLayout::default()),
        vec!["Final Jeopardy".to_string(), "Triple stumper".to_string()]
    );
}

#[test]
fn generate_pins_center_phrase() {
    let show = show_with(30, Some("Tribal Council"));
    let card = generate_card_with_rng(&show, &CardLayout::default(), &mut rng()).unwrap();

    assert_eq!(card.size, 5);
    assert_eq!(card.cells().len(), 25);
    let center = card.cell(2, 2).unwrap();
    assert_eq!(center.phrase, "Tribal Council");
    assert!(center.marked);
    assert!(center.pinned);

    let drawn: HashSet<&str> = card.cells().iter().map(|c| c.phrase.as_str()).collect();
    assert_eq!(drawn.len(), 25, "phrases must not repeat");
    assert_eq!(card.cells().iter().filter(|c| c.marked).count(), 1);
    assert_eq!(card.show_id, 3);
}

#[test]
fn generate_uses_free_space_without_center_phrase() {
    let show = show_with(24, None);
    let card = generate_card_with_rng(&show, &CardLayout::default(), &mut rng()).unwrap();
    assert_eq!(card.cell(2, 2).unwrap().phrase, FREE_SPACE);

    let bare = CardLayout::new(3, false).unwrap();
    let card = generate_card_with_rng(&show_with(9, None), &bare, &mut rng()).unwrap();
    assert!(card.cells().iter().all(|c| !c.pinned && !c.marked));
}

#[test]
fn generate_rejects_short_pool() {
    let show = show_with(23, None);
    let err = generate_card_with_rng(&show, &CardLayout::default(), &mut rng()).unwrap_err();
    assert_eq!(
        err,
        CardError::NotEnoughPhrases {
            needed: 24,
            available: 23
        }
    );
}

#[test]
fn generate_is_deterministic_for_a_seed() {
    let show = show_with(40, None);
    let layout = CardLayout::default();
    let a = generate_card_with_rng(&show, &layout, &mut rng()).unwrap();
    let b = generate_card_with_rng(&show, &layout, &mut rng()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn toggle_and_detect_lines() {
    let show = show_with(24, None);
    let mut card = generate_card_with_rng(&show, &CardLayout::default(), &mut rng()).unwrap();
    assert!(!card.has_bingo());

    for col in 0..5 {
        if col != 2 {
            assert!(card.toggle(2, col).unwrap());
        }
    }
    assert_eq!(card.completed_lines(), vec![Line::Row(2)]);

    for row in [0, 1, 3, 4] {
        card.toggle(row, row).unwrap();
    }
    assert_eq!(card.completed_lines(), vec![Line::Row(2), Line::Diagonal]);

    assert!(!card.toggle(2, 0).unwrap());
    assert_eq!(card.completed_lines(), vec![Line::Diagonal]);

    card.clear_marks();
    assert!(!card.has_bingo());
    assert!(card.cell(2, 2).unwrap().marked);
}

#[test]
fn toggle_errors() {
    let show = show_with(24, None);
    let mut card = generate_card_with_rng(&show, &CardLayout::default(), &mut rng()).unwrap();
    assert_eq!(card.toggle(2, 2), Err(CardError::CenterLocked));
    assert_eq!(
        card.toggle(5, 0),
        Err(CardError::OutOfBounds { row: 5, col: 0 })
    );
    assert!(card.cell(0, 5).is_none());
}

#[test]
fn columns_and_anti_diagonal() {
    let show = show_with(9, None);
    let layout = CardLayout::new(3, false).unwrap();
    let mut card = generate_card_with_rng(&show, &layout, &mut rng()).unwrap();

    for row in 0..3 {
        card.toggle(row, 2).unwrap();
    }
    card.toggle(1, 1).unwrap();
    card.toggle(2, 0).unwrap();
    assert_eq!(
        card.completed_lines(),
        vec![Line::Column(2), Line::AntiDiagonal]
    );
    assert_eq!(card.rows().count(), 3);
}

#[test]
fn card_serializes_lines_and_cells() {
    let json = serde_json::to_value(Line::Row(1)).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "row", "index": 1}));

    let card = generate_card_with_rng(&show_with(24, None), &CardLayout::default(), &mut rng())
        .unwrap();
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["showTitle"], "Jeopardy!");
    assert_eq!(json["cells"].as_array().unwrap().len(), 25);
}

#[test]
fn card_deserialization_checks_shape() {
    let card = generate_card_with_rng(&show_with(24, None), &CardLayout::default(), &mut rng())
        .unwrap();
    let mut json = serde_json::to_value(&card).unwrap();
    let back: BingoCard = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(back, card);

    json["size"] = serde_json::json!(0);
    assert!(serde_json::from_value::<BingoCard>(json.clone()).is_err());

    json["size"] = serde_json::json!(6);
    let err = serde_json::from_value::<BingoCard>(json).unwrap_err();
    assert!(err.to_string().contains("expected 36"));
}

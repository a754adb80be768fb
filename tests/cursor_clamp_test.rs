//! Cursor bounds over every short sequence of up/down moves

use prme::catalog::{AppType, CatalogDocument, StarterTemplate};
use prme::wizard::{Cursor, Phase, Wizard, WizardEvent};
use tui_input::InputRequest;

const MAX_MOVES: u32 = 8;

/// Expected cursor after a move sequence, encoded as bits (1 = down)
fn model(len: usize, moves: u32, count: u32) -> usize {
    let mut position = 0usize;
    for i in 0..count {
        if moves & (1 << i) != 0 {
            if position + 1 < len {
                position += 1;
            }
        } else {
            position = position.saturating_sub(1);
        }
    }
    position
}

fn sequences() -> impl Iterator<Item = (u32, u32)> {
    (0..=MAX_MOVES).flat_map(|count| (0..(1u32 << count)).map(move |moves| (moves, count)))
}

fn apply(wizard: &mut Wizard<CatalogDocument>, moves: u32, count: u32) {
    for i in 0..count {
        let event = if moves & (1 << i) != 0 {
            WizardEvent::Down
        } else {
            WizardEvent::Up
        };
        wizard.handle(event);
    }
}

fn named(catalog: CatalogDocument) -> Wizard<CatalogDocument> {
    let mut wizard = Wizard::new(catalog, "/tmp").unwrap();
    wizard.handle(WizardEvent::Edit(InputRequest::InsertChar('x')));
    wizard.handle(WizardEvent::Confirm);
    wizard
}

fn catalog_with_languages(count: usize) -> CatalogDocument {
    let mut doc = CatalogDocument::new();
    for i in 0..count {
        doc.add_template(
            &format!("Lang{}", i),
            AppType::WebApp,
            StarterTemplate::new("starter", "https://git.example.com/starter.git"),
        );
    }
    doc
}

fn catalog_with_stacks(count: usize) -> CatalogDocument {
    let mut doc = CatalogDocument::new();
    for i in 0..count {
        doc.add_template(
            "Go",
            AppType::WebApp,
            StarterTemplate::new(format!("stack-{}", i), "https://git.example.com/s.git"),
        );
    }
    doc
}

#[test]
fn test_cursor_type_never_leaves_bounds() {
    for len in 0..=5 {
        for (moves, count) in sequences() {
            let mut cursor = Cursor::default();
            for i in 0..count {
                if moves & (1 << i) != 0 {
                    cursor.down(len);
                } else {
                    cursor.up();
                }
            }
            assert_eq!(cursor.index(), model(len, moves, count), "len {}", len);
            assert!(cursor.index() < len.max(1));
        }
    }
}

#[test]
fn test_language_cursor_is_clamped() {
    for len in 1..=4 {
        for (moves, count) in sequences() {
            let mut wizard = named(catalog_with_languages(len));
            apply(&mut wizard, moves, count);
            assert_eq!(wizard.phase(), Phase::SelectingLanguage);
            assert_eq!(wizard.cursor(), Some(model(len, moves, count)));
        }
    }
}

#[test]
fn test_app_type_cursor_is_clamped() {
    let len = AppType::ALL.len();
    for (moves, count) in sequences() {
        let mut wizard = named(catalog_with_languages(1));
        wizard.handle(WizardEvent::Confirm);
        apply(&mut wizard, moves, count);
        assert_eq!(wizard.phase(), Phase::SelectingAppType);
        assert_eq!(wizard.cursor(), Some(model(len, moves, count)));
    }
}

#[test]
fn test_stack_cursor_is_clamped() {
    for len in 1..=4 {
        for (moves, count) in sequences() {
            let mut wizard = named(catalog_with_stacks(len));
            wizard.handle(WizardEvent::Confirm);
            wizard.handle(WizardEvent::Confirm);
            apply(&mut wizard, moves, count);
            assert_eq!(wizard.phase(), Phase::SelectingStack);
            assert_eq!(wizard.cursor(), Some(model(len, moves, count)));
        }
    }
}

//! Live-substitution behavior over whole spins: the wheel face keeps its
//! size, only enabled menu entries ever appear on it, and the full menu
//! cycles through a wheel smaller than the menu.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dinnerwheel::application::{ManualScheduler, SpinHooks, Spinner};
use dinnerwheel::domain::errors::WheelError;
use dinnerwheel::domain::menu::{Choice, Menu};
use dinnerwheel::domain::wheel::{SpinTuning, WedgeRing};

fn named(labels: &[&str]) -> Vec<Choice> {
    labels.iter().map(|l| Choice::new(*l)).collect()
}

fn twelve() -> Vec<Choice> {
    named(&[
        "Pizza", "Stir-Fry", "Tacos", "Risotto", "Teriyaki", "Pad Thai", "Curry", "Carbonara",
        "Falafel", "Ramen", "Salad", "Pie",
    ])
}

#[test]
fn test_wheel_face_never_resizes_mid_spin() {
    let ring = WedgeRing::new(8).expect("valid ring");
    let source = twelve();
    let allowed: HashSet<String> = source.iter().map(|c| c.label.clone()).collect();
    let mut spinner = Spinner::new(ring, SpinTuning::default(), source).expect("spinner");
    let scheduler = ManualScheduler::default();

    spinner.spin(0.3, SpinHooks::new());
    while spinner.is_spinning() {
        spinner.tick(&scheduler);
        assert_eq!(spinner.working().len(), 8);
        for choice in spinner.working() {
            assert!(allowed.contains(&choice.label));
        }
    }
}

#[test]
fn test_all_dishes_reach_the_wheel() {
    let ring = WedgeRing::new(8).expect("valid ring");
    let source = twelve();
    let everyone: HashSet<String> = source.iter().map(|c| c.label.clone()).collect();
    let mut spinner = Spinner::new(ring, SpinTuning::default(), source).expect("spinner");
    let scheduler = ManualScheduler::default();

    let mut seen: HashSet<String> = spinner.working().iter().map(|c| c.label.clone()).collect();

    // A 0.3 rad/frame spin sweeps several full turns, which is dozens of
    // crossings; four substitutions already bring in the unplaced dishes.
    spinner.spin(0.3, SpinHooks::new());
    while spinner.is_spinning() {
        spinner.tick(&scheduler);
        seen.extend(spinner.working().iter().map(|c| c.label.clone()));
    }

    assert_eq!(seen, everyone);
}

#[test]
fn test_on_update_reports_the_aligned_working_label() {
    let ring = WedgeRing::new(8).expect("valid ring");
    let mut spinner = Spinner::new(ring, SpinTuning::default(), twelve()).expect("spinner");
    let scheduler = ManualScheduler::default();

    let updates: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    spinner.spin(
        0.3,
        SpinHooks::new().on_update(move |choice| sink.borrow_mut().push(choice.label.clone())),
    );

    let mut reported = 0usize;
    while spinner.is_spinning() {
        spinner.tick(&scheduler);
        let updates = updates.borrow();
        if updates.len() > reported {
            // The crossing this tick reported exactly the label now under
            // the pointer.
            assert_eq!(updates.len(), reported + 1);
            assert_eq!(updates[reported], spinner.aligned_choice().label);
            reported = updates.len();
        }
    }

    assert!(reported > 8, "only {reported} crossings were reported");
}

#[test]
fn test_short_menu_round_robins_onto_the_face() {
    let ring = WedgeRing::new(8).expect("valid ring");
    let source = named(&["Pho", "Gnocchi", "Paella"]);
    let allowed: HashSet<&str> = ["Pho", "Gnocchi", "Paella"].into();
    let mut spinner = Spinner::new(ring, SpinTuning::default(), source).expect("spinner");
    let scheduler = ManualScheduler::default();

    // Three dishes wrap around the eight wedges from the start.
    let initial: Vec<&str> = spinner.working().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        initial,
        vec!["Pho", "Gnocchi", "Paella", "Pho", "Gnocchi", "Paella", "Pho", "Gnocchi"]
    );

    let winner: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&winner);
    spinner.spin(
        0.25,
        SpinHooks::new().on_spin_end(move |_, choice| {
            *slot.borrow_mut() = Some(choice.label.clone());
        }),
    );
    while spinner.is_spinning() {
        spinner.tick(&scheduler);
        assert_eq!(spinner.working().len(), 8);
        for choice in spinner.working() {
            assert!(allowed.contains(choice.label.as_str()));
        }
    }

    let winner = winner.borrow().clone().expect("no winner reported");
    assert!(allowed.contains(winner.as_str()));
}

#[test]
fn test_disabled_dishes_never_appear() {
    let mut menu = Menu::new(twelve());
    for choice in menu.choices().to_vec() {
        if choice.label.len() % 3 == 0 {
            menu.set_enabled(choice.key, false).expect("known key");
        }
    }
    let enabled: HashSet<String> = menu
        .enabled_choices()
        .iter()
        .map(|c| c.label.clone())
        .collect();
    assert!(enabled.len() >= 2, "test menu disabled too much");

    let ring = WedgeRing::new(8).expect("valid ring");
    let mut spinner =
        Spinner::new(ring, SpinTuning::default(), menu.enabled_choices()).expect("spinner");
    let scheduler = ManualScheduler::default();

    spinner.spin(0.3, SpinHooks::new());
    while spinner.is_spinning() {
        spinner.tick(&scheduler);
        for choice in spinner.working() {
            assert!(enabled.contains(&choice.label));
        }
    }
    assert!(enabled.contains(&spinner.aligned_choice().label));
}

#[test]
fn test_single_enabled_dish_cannot_build_wheel() {
    let mut menu = Menu::default_dishes();
    let keep = menu.choices()[0].key;
    for choice in menu.choices().to_vec() {
        if choice.key != keep {
            menu.set_enabled(choice.key, false).expect("known key");
        }
    }
    assert_eq!(menu.enabled_count(), 1);

    let ring = WedgeRing::new(8).expect("valid ring");
    let result = Spinner::new(ring, SpinTuning::default(), menu.enabled_choices());
    assert!(matches!(
        result,
        Err(WheelError::NotEnoughChoices { got: 1 })
    ));
}

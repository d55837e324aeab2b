//! Panel transitions sampled through real frames.

mod common;

use common::{flattened_text, render_app, TestAppBuilder};
use folio::animation::TransitionState;
use folio::ui::ClickAction;
use folio::view_state::Section;

fn settle(app: &mut folio::app::App) {
    for _ in 0..200 {
        app.tick();
    }
}

#[test]
fn test_exit_plays_before_enter() {
    let (mut app, _) = TestAppBuilder::new().build();
    settle(&mut app);
    assert!(!app.is_animating());

    app.select_section(Section::Skills);
    assert!(matches!(
        app.transition.state(),
        TransitionState::Exiting {
            from: Section::About,
            to: Section::Skills,
            ..
        }
    ));

    // Mid-exit: the About panel is still the one drawn, and it takes no clicks
    app.advance_clock(200);
    let screen = render_app(&mut app, 100, 40);
    let skill_tiles = app
        .hit_registry
        .areas()
        .iter()
        .filter(|a| matches!(a.action, ClickAction::SkillTile(_)))
        .count();
    assert_eq!(skill_tiles, 0);
    assert!(!flattened_text(&screen).contains("Docker"));

    // Exit done: Skills enters
    app.advance_clock(300);
    assert_eq!(app.transition.visible_section(), Section::Skills);

    settle(&mut app);
    let screen = render_app(&mut app, 100, 40);
    assert!(flattened_text(&screen).contains("Docker"));
    assert!(!app.is_animating());
}

#[test]
fn test_retarget_during_exit_goes_to_latest() {
    let (mut app, _) = TestAppBuilder::new().build();
    settle(&mut app);
    app.select_section(Section::Skills);
    app.advance_clock(100);
    app.select_section(Section::Contact);
    assert!(matches!(
        app.transition.state(),
        TransitionState::Exiting {
            from: Section::About,
            to: Section::Contact,
            ..
        }
    ));
    settle(&mut app);
    assert_eq!(app.transition.visible_section(), Section::Contact);
    assert_eq!(app.view.active_section(), Section::Contact);
}

#[test]
fn test_faded_panel_blends_toward_background() {
    use folio::ui::theme::{DARK_100, TEXT_BODY};

    let (mut app, _) = TestAppBuilder::new().build();
    settle(&mut app);
    app.select_section(Section::Contact);
    // About is about half way out
    app.advance_clock(100);
    let screen = render_app(&mut app, 100, 40);

    let (x, y) = (0..40u16)
        .flat_map(|y| (0..98u16).map(move |x| (x, y)))
        .find(|&(x, y)| {
            screen[(x, y)].symbol() == "H"
                && screen[(x + 1, y)].symbol() == "i"
                && screen[(x + 2, y)].symbol() == "!"
        })
        .expect("start of the bio is still drawn");
    let fg = screen[(x, y)].fg;
    assert_ne!(fg, TEXT_BODY);
    assert_ne!(fg, DARK_100);
}

#[test]
fn test_reduced_motion_switches_in_one_step() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    app.select_section(Section::Projects);
    assert!(matches!(
        app.transition.state(),
        TransitionState::Shown {
            section: Section::Projects,
            ..
        }
    ));
    assert!(!app.is_animating());
}

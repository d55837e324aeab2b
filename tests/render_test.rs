//! Full-frame rendering on a `TestBackend`.

mod common;

use common::{
    appear_in_order, buffer_to_string, collapse_whitespace, flattened_text, inner_text, render_app,
    TestAppBuilder,
};
use folio::ui::ClickAction;
use folio::view_state::Section;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 40;

fn count_actions(app: &folio::app::App, pred: impl Fn(&ClickAction) -> bool) -> usize {
    app.hit_registry
        .areas()
        .iter()
        .filter(|a| pred(&a.action))
        .count()
}

#[test]
fn test_header_and_nav_are_drawn() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    let text = buffer_to_string(&render_app(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("Anuj Kumar"));
    assert!(text.contains("Full Stack Developer"));
    assert!(text.contains("AK"));
    assert!(text.contains("▶ About"));
    for label in ["Skills", "Projects", "Contact"] {
        assert!(text.contains(label), "missing nav label {}", label);
    }
    let nav = count_actions(&app, |a| matches!(a, ClickAction::SelectSection(_)));
    assert_eq!(nav, 4);
}

#[test]
fn test_exactly_one_panel_per_section() {
    for section in Section::ALL {
        let (mut app, _) = TestAppBuilder::new().without_animations().build();
        app.select_section(section);
        let screen = render_app(&mut app, WIDTH, HEIGHT);
        let text = flattened_text(&screen);

        let skills = count_actions(&app, |a| matches!(a, ClickAction::SkillTile(_)));
        let cards = count_actions(&app, |a| matches!(a, ClickAction::ProjectCard(_)));
        let links = count_actions(&app, |a| matches!(a, ClickAction::OpenContact(_)));
        let bio_shown = text.contains(&app.profile.bio);

        let expected = match section {
            Section::About => (true, 0, 0, 0),
            Section::Skills => (false, 9, 0, 0),
            Section::Projects => (false, 0, 3, 0),
            Section::Contact => (false, 0, 0, 3),
        };
        assert_eq!((bio_shown, skills, cards, links), expected, "section {:?}", section);
        assert!(text.contains(section.heading()));
    }
}

#[test]
fn test_skills_render_in_declared_order() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    app.select_section(Section::Skills);
    let text = buffer_to_string(&render_app(&mut app, WIDTH, HEIGHT));
    let names: Vec<&str> = app.profile.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names.len(), 9);
    assert!(appear_in_order(&text, &names), "skills out of order:\n{}", text);
}

#[test]
fn test_projects_show_placeholders_until_hovered() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    app.select_section(Section::Projects);
    let text = buffer_to_string(&render_app(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("░"));
    assert!(text.contains("▣"));
    assert!(!text.contains("Live Preview"));
    assert!(!text.contains("Distributed Database System"));
}

#[test]
fn test_hovered_card_reveals_tags_in_order() {
    for index in 0..3 {
        let (mut app, _) = TestAppBuilder::new().without_animations().build();
        app.select_section(Section::Projects);
        app.hover_start(index);
        let text = buffer_to_string(&render_app(&mut app, WIDTH, HEIGHT));

        let project = &app.profile.projects[index];
        assert!(text.contains(&project.title), "title of card {}", index);
        let tags: Vec<String> = project
            .technologies
            .iter()
            .map(|t| format!(" {} ", t))
            .collect();
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
        assert!(appear_in_order(&text, &tags), "tags of card {}:\n{}", index, text);
        assert!(text.contains("Live Preview"));
        assert!(text.contains("Code"));

        let buttons = count_actions(&app, |a| {
            matches!(a, ClickAction::OpenProjectLive(i) | ClickAction::OpenProjectCode(i) if *i == index)
        });
        assert_eq!(buttons, 2);
    }
}

#[test]
fn test_hovered_card_shows_everything_at_any_width() {
    for width in [160, 130, 100] {
        for index in 0..3 {
            let (mut app, _) = TestAppBuilder::new().without_animations().build();
            app.select_section(Section::Projects);
            app.hover_start(index);
            let screen = render_app(&mut app, width, HEIGHT);
            let card = app
                .hit_registry
                .areas()
                .iter()
                .find(|a| a.action == ClickAction::ProjectCard(index))
                .map(|a| a.rect)
                .expect("card registered");
            let text = inner_text(&screen, card);

            let project = &app.profile.projects[index];
            assert!(
                collapse_whitespace(&text).contains(&project.description),
                "{}x{} card {} description cut:\n{}",
                width,
                HEIGHT,
                index,
                text
            );
            let tags: Vec<String> = project
                .technologies
                .iter()
                .map(|t| format!(" {} ", t))
                .collect();
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            assert!(
                appear_in_order(&text, &tags),
                "{}x{} card {} tags:\n{}",
                width,
                HEIGHT,
                index,
                text
            );
            assert!(text.contains("Live Preview"));
        }
    }
}

#[test]
fn test_revealed_card_stays_hovered_where_it_overlaps_a_neighbour() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    app.select_section(Section::Projects);
    app.hover_start(0);
    render_app(&mut app, 80, HEIGHT);
    let rect_of = |index: usize| {
        app.hit_registry
            .areas()
            .iter()
            .find(|a| a.action == ClickAction::ProjectCard(index))
            .map(|a| a.rect)
            .expect("card registered")
    };
    let (revealed, below) = (rect_of(0), rect_of(2));
    let (x, y) = (revealed.x + 1, revealed.bottom() - 1);
    assert!(below.contains(ratatui::layout::Position::new(x, y)));
    assert_eq!(
        app.hit_registry.hit_test(x, y).and_then(|a| a.project_card()),
        Some(0)
    );
}

#[test]
fn test_compact_nav_keeps_every_label() {
    for (width, height) in [(70, 30), (40, 16)] {
        let (mut app, _) = TestAppBuilder::new().without_animations().build();
        let text = buffer_to_string(&render_app(&mut app, width, height));
        assert!(
            appear_in_order(&text, &["About", "Skills", "Projects", "Contact"]),
            "nav at {}x{}:\n{}",
            width,
            height,
            text
        );
        assert!(!text.contains("Work"));
        let nav = count_actions(&app, |a| matches!(a, ClickAction::SelectSection(_)));
        assert_eq!(nav, 4);
    }
}

#[test]
fn test_contact_links_show_literal_addresses() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    app.select_section(Section::Contact);
    let text = buffer_to_string(&render_app(&mut app, WIDTH, HEIGHT));
    assert!(appear_in_order(
        &text,
        &["anujkeshri449@gmail.com", "LinkedIn", "GitHub"]
    ));
    assert!(!text.contains("leetcode"));
}

#[test]
fn test_click_on_rendered_nav_switches_panel() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    render_app(&mut app, WIDTH, HEIGHT);
    let contact_tab = app
        .hit_registry
        .areas()
        .iter()
        .find(|a| a.action == ClickAction::SelectSection(Section::Contact))
        .map(|a| a.rect)
        .expect("contact tab registered");

    folio::ui::handle_click_action(&mut app, ClickAction::SelectSection(Section::Contact));
    assert_eq!(app.view.active_section(), Section::Contact);
    let text = buffer_to_string(&render_app(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("▶ Contact"));
    assert!(contact_tab.width >= "Contact".len() as u16);
}

#[test]
fn test_mouse_hover_over_rendered_card_reveals_it() {
    use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    app.select_section(Section::Projects);
    render_app(&mut app, WIDTH, HEIGHT);
    let card = app
        .hit_registry
        .areas()
        .iter()
        .find(|a| a.action == ClickAction::ProjectCard(1))
        .map(|a| a.rect)
        .expect("card registered");

    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: card.x + 1,
        row: card.y + 1,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.view.hovered_project(), Some(1));
    let text = buffer_to_string(&render_app(&mut app, WIDTH, HEIGHT));
    assert!(text.contains("Distributed Database System"));

    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.view.hovered_project(), None);
}

#[test]
fn test_standard_terminal_fits_every_card() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    app.select_section(Section::Projects);
    render_app(&mut app, 80, 24);
    let cards = count_actions(&app, |a| matches!(a, ClickAction::ProjectCard(_)));
    assert_eq!(cards, 3);
}

#[test]
fn test_too_small_terminal_shows_message() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    let text = buffer_to_string(&render_app(&mut app, 30, 10));
    assert!(text.contains("Terminal too small"));
    assert!(app.hit_registry.is_empty());
}

#[test]
fn test_render_clears_dirty_flag() {
    let (mut app, _) = TestAppBuilder::new().without_animations().build();
    assert!(app.needs_redraw);
    render_app(&mut app, WIDTH, HEIGHT);
    assert!(!app.needs_redraw);
}

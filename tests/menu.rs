mod common;

use std::io::Cursor;

use gamemaster_guidance::Menu;
use gamemaster_guidance::menu::CLEAR_SCREEN;

fn session(input: &str, with_configs: bool) -> String {
    let (city, guild) = if with_configs {
        (Some(common::demo_city(1)), Some(common::demo_guild()))
    } else {
        (None, None)
    };
    let mut menu = Menu::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        common::generator(2),
        city,
        guild,
    );
    menu.run().unwrap();
    String::from_utf8(menu.into_output()).unwrap()
}

#[test]
fn full_tour() {
    let input = [
        "1", "2", "42", // a dwarf name
        "2", "1", "42", // a random character
        "3", "2", "7", "42", // a human bounty, then back
        "4", "1", "2", "3", "42", // city details, NPCs, clear
        "5", "1", "2", "42", // guild details and jobs
        "999",
    ]
    .join("\n");
    let out = session(&input, true);

    assert!(out.starts_with("\nWelcome to Gamemaster Guidance\n"));
    assert!(out.contains(" of "), "dwarf names carry their clan");
    assert!(out.contains("Traits:"));
    assert!(out.contains("BOUNTY DETAILS"));
    assert!(out.contains("RAVENMOOR"));
    assert!(out.contains("\nNPCs\n"));
    assert!(out.contains(CLEAR_SCREEN));
    assert!(out.contains("THE SCZARNI OF RAVENMOOR"));
    assert!(out.contains("Job List"));
    assert!(out.contains("\n10. "));
    assert!(out.ends_with("Exiting Gamemaster Guidance\n"));
}

#[test]
fn sessions_are_reproducible() {
    let input = "2\n1\n1\n1\n42\n3\n1\n5\n42\n999\n";
    assert_eq!(session(input, true), session(input, true));
}

#[test]
fn unknown_choice_in_a_submenu_exits() {
    let out = session("4\n17\n", true);
    assert!(out.contains("Print the city details"));
    assert!(out.ends_with("Exiting Gamemaster Guidance\n"));
    assert_eq!(out.matches("Welcome").count(), 1);
}

#[test]
fn bounty_menu_without_a_city() {
    let out = session("3\n1\n12\n42\n999\n", false);
    assert!(out.contains("Enter bounty's minimum level:"));
    assert!(out.contains("BOUNTY DETAILS"));
}

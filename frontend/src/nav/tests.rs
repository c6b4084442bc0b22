use super::*;
use lwsc_admin_shared::AdminProfile;

// =========================================================
// Test fixtures
// =========================================================

fn item(name: &'static str, permission: Option<&'static str>) -> NavNode {
    let mut node = NavItem::new(name, AppRoute::Dashboard);
    node.permission = permission;
    NavNode::Item(node)
}

fn profile_with(role: &str, permissions: &[&str]) -> AdminProfile {
    AdminProfile {
        role: role.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        ..Default::default()
    }
}

fn names(nodes: &[NavNode]) -> Vec<&'static str> {
    nodes
        .iter()
        .map(|n| match n {
            NavNode::Title(name) => *name,
            NavNode::Item(item) => item.name,
            NavNode::Group(group) => group.name,
        })
        .collect()
}

// =========================================================
// Permission filtering
// =========================================================

#[test]
fn denied_items_are_removed() {
    let tree = vec![
        item("Dashboard", Some("dashboard")),
        item("Users", Some("users")),
        item("Profile", None),
    ];
    let profile = profile_with("admin", &["dashboard"]);

    let visible = filter_menu(tree, Some(&profile));
    assert_eq!(names(&visible), vec!["Dashboard", "Profile"]);
}

#[test]
fn elevated_roles_bypass_filtering_entirely() {
    let tree = menu();
    for role in ["super-admin", "superadmin"] {
        let profile = profile_with(role, &[]);
        let visible = filter_menu(tree.clone(), Some(&profile));
        assert_eq!(visible, tree);
    }
}

#[test]
fn absent_profile_returns_the_tree_unfiltered() {
    let tree = menu();
    assert_eq!(filter_menu(tree.clone(), None), tree);
}

#[test]
fn groups_are_never_permission_checked() {
    // Existing behavior, preserved: a group survives even when the profile
    // holds no permissions at all.
    let tree = vec![
        NavNode::Title("Section"),
        NavNode::Group(NavGroup {
            name: "Rewards",
            icon: None,
            children: vec![NavItem::new("Badges", AppRoute::Badges)],
        }),
    ];
    let profile = profile_with("admin", &[]);

    let visible = filter_menu(tree, Some(&profile));
    assert_eq!(names(&visible), vec!["Section", "Rewards"]);
}

// =========================================================
// Title pruning
// =========================================================

#[test]
fn of_two_consecutive_titles_only_the_second_survives() {
    let tree = vec![
        NavNode::Title("First"),
        NavNode::Title("Second"),
        item("Allowed", None),
    ];
    let profile = profile_with("admin", &[]);

    let visible = filter_menu(tree, Some(&profile));
    assert_eq!(names(&visible), vec!["Second", "Allowed"]);
}

#[test]
fn trailing_title_is_always_removed() {
    let tree = vec![item("Allowed", None), NavNode::Title("Dangling")];
    let profile = profile_with("admin", &[]);

    let visible = filter_menu(tree, Some(&profile));
    assert_eq!(names(&visible), vec!["Allowed"]);
}

#[test]
fn title_whose_section_was_emptied_disappears() {
    let tree = vec![
        NavNode::Title("Dashboard"),
        item("Dashboard", Some("dashboard")),
        NavNode::Title("Management"),
        item("Users", Some("users")),
        item("Facilities", Some("facilities")),
    ];
    // Only the dashboard permission: the whole Management section vanishes,
    // title included.
    let profile = profile_with("admin", &["dashboard"]);

    let visible = filter_menu(tree, Some(&profile));
    assert_eq!(names(&visible), vec!["Dashboard", "Dashboard"]);
}

#[test]
fn order_is_preserved() {
    let profile = profile_with("admin", &["dashboard", "users", "facilities"]);
    let visible = filter_menu(menu(), Some(&profile));

    let expected = [
        "Dashboard",
        "Dashboard",
        "Management",
        "User Management",
        "Facilities",
        "Resources",
        "Rewards",
        "Logs & Reports",
    ];
    assert_eq!(names(&visible), expected);
}

use super::{list_items, run_blocking, RouterHarness};
use wayfinder::apps::contacts::{routes, routing_app, CONTACT_ID};

#[test]
fn given_a_literal_path_should_match_one_leaf_without_params() {
    let table = routes().unwrap();

    for path in ["/", "/about", "/contact", "/contacts"] {
        let found = table.match_path(path);
        assert_eq!(found.chain.len(), 1, "{path}");
        assert!(found.params.is_empty(), "{path} bound {:?}", found.params);
    }
}

#[test]
fn given_a_contact_id_should_bind_and_select_that_contact() {
    let found = routes().unwrap().match_path("/contacts/42");
    assert_eq!(found.params.get(CONTACT_ID), Some("42"));

    let renderer = run_blocking(routing_app().unwrap(), "/contacts/42");
    renderer.with_last(|page| {
        let selected = page.node.find_all("article");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].attribute("data-id"), Some("42"));
        assert!(page.node.text_content().contains("Grace Hopper"));
    });
}

#[test]
fn given_an_unknown_contact_id_should_render_not_found_within_the_list() {
    let renderer = run_blocking(routing_app().unwrap(), "/contacts/999");
    renderer.with_last(|page| {
        assert!(page.node.find_all("article").is_empty());
        assert_eq!(list_items(&page.node).len(), 3);
        let not_found = page.node.find_all("p");
        assert!(not_found
            .iter()
            .any(|p| p.attribute("class") == Some("not-found")));
        assert!(page.node.text_content().contains("No contact with id 999."));
    });
}

#[test]
fn given_a_non_numeric_contact_id_should_render_the_plain_list() {
    let renderer = run_blocking(routing_app().unwrap(), "/contacts/grace");
    renderer.with_last(|page| {
        assert!(page.node.find_all("article").is_empty());
        assert!(!page.node.text_content().contains("No contact"));
        assert_eq!(list_items(&page.node).len(), 3);
    });
}

#[test]
fn given_an_undeclared_path_should_select_the_wildcard_fallback() {
    let table = routes().unwrap();
    let found = table.match_path("/nope");
    assert_eq!(found.leaf().map(|id| table.pattern(id)), Some("*"));

    let renderer = run_blocking(routing_app().unwrap(), "/nope");
    renderer.with_last(|page| {
        assert!(page.node.text_content().contains("Nothing lives at /nope."));
    });
}

#[test]
fn given_nav_links_when_followed_should_render_each_page() {
    let mut app = RouterHarness::start(routing_app().unwrap(), "/");
    assert_eq!(app.heading(), "Home");

    let hrefs: Vec<String> = app
        .last_node()
        .find_all("nav")[0]
        .children
        .iter()
        .filter_map(|link| match link {
            wayfinder::Node::Element(a) => a.attribute("href").map(str::to_string),
            _ => None,
        })
        .collect();
    assert_eq!(hrefs, vec!["/", "/about", "/contact", "/contacts"]);

    let mut headings = Vec::new();
    for href in &hrefs {
        app.navigate(href);
        headings.push(app.heading());
    }
    assert_eq!(headings, vec!["Home", "About", "Contact", "Contacts"]);
    assert_eq!(app.driver.model().seq, 5);
    assert_eq!(app.pending_effects(), 0);
}

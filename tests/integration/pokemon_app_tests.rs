use std::sync::Arc;

use super::{list_items, pokemon_body, run_blocking, RouterHarness, ScriptedClient};
use wayfinder::apps::pokemon::pokemon_app;
use wayfinder::LoadState;

#[test]
fn given_the_index_path_should_render_home_inside_the_layout() {
    let client = Arc::new(ScriptedClient::new());
    let app = RouterHarness::start(pokemon_app(client.clone()).unwrap(), "/");

    let node = app.last_node();
    assert_eq!(node.find_all("nav").len(), 1);
    assert_eq!(app.heading(), "Pokemon explorer");
    assert_eq!(app.pending_effects(), 0);
    assert_eq!(client.calls(), 0);
}

#[test]
fn given_a_pending_loader_should_render_the_fallback_inside_the_layout() {
    let client = Arc::new(ScriptedClient::new().then_json(200, &pokemon_body(&["pikachu"])));
    let mut app = RouterHarness::start(pokemon_app(client).unwrap(), "/");

    app.navigate("/pokemons");
    assert_eq!(app.pending_effects(), 1);
    let node = app.last_node();
    assert_eq!(node.find_all("nav").len(), 1);
    assert!(node.text_content().contains("Loading..."));
    assert!(app.renderer.with_last(|page| page.loading).unwrap());

    app.settle_all();
    assert_eq!(list_items(&app.last_node()), vec!["pikachu"]);
    assert!(!app.renderer.with_last(|page| page.loading).unwrap());
}

#[test]
fn given_a_loader_superseded_by_a_page_without_one_should_discard_its_result() {
    let client = Arc::new(ScriptedClient::new().then_json(200, &pokemon_body(&["mewtwo"])));
    let mut app = RouterHarness::start(pokemon_app(client.clone()).unwrap(), "/");

    app.navigate("/pokemons");
    app.navigate("/about");
    let renders_before = app.renderer.count();

    // The /pokemons loader settles only after /about is active.
    app.settle_all();
    assert_eq!(client.calls(), 1);

    assert_eq!(app.heading(), "About");
    app.renderer.with_renders(|renders| {
        assert!(renders[renders_before..]
            .iter()
            .all(|page| !page.node.text_content().contains("mewtwo")));
    });
    assert_eq!(app.driver.model().path, "/about");
}

#[test]
fn given_two_navigations_when_the_first_loader_settles_last_should_keep_the_second_result() {
    // Responses go out in poll order: the second navigation's loader polls first.
    let client = Arc::new(
        ScriptedClient::new()
            .then_json(200, &pokemon_body(&["bulbasaur"]))
            .then_json(200, &pokemon_body(&["mewtwo"])),
    );
    let mut app = RouterHarness::start(pokemon_app(client).unwrap(), "/");

    app.navigate("/pokemons");
    app.navigate("/pokemons");
    assert_eq!(app.pending_effects(), 2);

    app.settle(1);
    assert_eq!(list_items(&app.last_node()), vec!["bulbasaur"]);

    app.settle(0);
    assert_eq!(list_items(&app.last_node()), vec!["bulbasaur"]);
    app.renderer.with_renders(|renders| {
        assert!(renders
            .iter()
            .all(|page| !page.node.text_content().contains("mewtwo")));
    });
}

#[test]
fn given_two_navigations_when_the_first_loader_settles_first_should_stay_pending() {
    let client = Arc::new(
        ScriptedClient::new()
            .then_json(200, &pokemon_body(&["mewtwo"]))
            .then_json(200, &pokemon_body(&["bulbasaur"])),
    );
    let mut app = RouterHarness::start(pokemon_app(client).unwrap(), "/");

    app.navigate("/pokemons");
    app.navigate("/pokemons");

    app.settle(0);
    assert!(app.last_node().text_content().contains("Loading..."));
    assert!(list_items(&app.last_node()).is_empty());

    app.settle(0);
    assert_eq!(list_items(&app.last_node()), vec!["bulbasaur"]);
}

#[test]
fn given_a_server_error_should_render_an_empty_list() {
    let client = Arc::new(ScriptedClient::new().then_json(500, "internal error"));
    let renderer = run_blocking(pokemon_app(client).unwrap(), "/pokemons");

    renderer.with_last(|page| {
        assert!(list_items(&page.node).is_empty());
        assert!(!page.loading);
        assert!(!page.node.text_content().contains("Loading..."));
    });
}

#[test]
fn given_a_network_failure_should_expose_the_error_in_navigation_state() {
    let client = Arc::new(ScriptedClient::new().then_network_error("offline"));
    let mut app = RouterHarness::start(pokemon_app(client).unwrap(), "/pokemons");
    app.settle_all();

    let model = app.driver.model();
    let leaf = model.leaf().unwrap();
    match model.load_state(leaf) {
        LoadState::Error(err) => assert!(err.to_string().contains("offline")),
        other => panic!("expected an error, got {other:?}"),
    }
    assert!(list_items(&app.last_node()).is_empty());
}

#[test]
fn given_an_unknown_path_should_render_not_found_inside_the_layout() {
    let client = Arc::new(ScriptedClient::new());
    let app = RouterHarness::start(pokemon_app(client).unwrap(), "/pokemons/25/moves");

    let node = app.last_node();
    assert_eq!(node.find_all("nav").len(), 1);
    assert!(node
        .text_content()
        .contains("Nothing lives at /pokemons/25/moves."));
    assert_eq!(app.pending_effects(), 0);
}

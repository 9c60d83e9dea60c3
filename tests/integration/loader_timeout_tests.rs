use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use super::{list_items, pokemon_body, RouterHarness, ScriptedClient};
use wayfinder::apps::pokemon::pokemon_app;
use wayfinder::{LoadState, LoaderError, RouterConfig};

fn elapsed_immediately(_: Duration) -> Pin<Box<dyn Future<Output = ()> + Send>> {
    Box::pin(async {})
}

fn never_elapses(_: Duration) -> Pin<Box<dyn Future<Output = ()> + Send>> {
    Box::pin(futures::future::pending())
}

#[test]
fn given_a_hanging_loader_when_the_timeout_elapses_should_settle_with_an_error() {
    let client = Arc::new(ScriptedClient::new().then_hang());
    let router = pokemon_app(client)
        .unwrap()
        .with_config(RouterConfig::default().with_loader_timeout(Duration::from_millis(250)))
        .with_timer(elapsed_immediately);
    let mut app = RouterHarness::start(router, "/pokemons");

    app.settle_all();

    let model = app.driver.model();
    assert_eq!(
        model.load_state(model.leaf().unwrap()),
        &LoadState::Error(LoaderError::Timeout { millis: 250 })
    );
    assert!(!app.last_node().text_content().contains("Loading..."));
    assert!(list_items(&app.last_node()).is_empty());
}

#[test]
fn given_a_loader_that_settles_before_the_timeout_should_keep_its_result() {
    let client = Arc::new(ScriptedClient::new().then_json(200, &pokemon_body(&["eevee"])));
    let router = pokemon_app(client)
        .unwrap()
        .with_config(RouterConfig::default().with_loader_timeout(Duration::from_secs(5)))
        .with_timer(never_elapses);
    let mut app = RouterHarness::start(router, "/pokemons");

    app.settle_all();
    assert_eq!(list_items(&app.last_node()), vec!["eevee"]);
}

#[test]
fn given_a_timeout_without_a_timer_should_wait_for_the_loader() {
    let client = Arc::new(ScriptedClient::new().then_json(200, &pokemon_body(&["eevee"])));
    let router = pokemon_app(client)
        .unwrap()
        .with_config(RouterConfig::from_json(r#"{ "loader_timeout_ms": 1 }"#).unwrap());
    let mut app = RouterHarness::start(router, "/pokemons");

    app.settle_all();
    assert_eq!(list_items(&app.last_node()), vec!["eevee"]);
}

//! Nested-route demo: a layout shell with navigation, and a list page whose
//! data comes from a loader.

use std::sync::Arc;

use futures_util::FutureExt;
use serde::Deserialize;

use crate::error::{LoaderError, RouteTableError};
use crate::http::{fetch_json, HttpClient};
use crate::loader::{LoaderArgs, LoaderFuture};
use crate::navigation::ViewContext;
use crate::route::{RouteEntry, RouteTable};
use crate::router::Router;
use crate::view::Node;

pub const POKEMON_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct PokemonPage {
    results: Vec<PokemonSummary>,
}

/// What this app's loaders produce.
pub type Pokemons = Vec<PokemonSummary>;

fn layout(_: &ViewContext<'_, Pokemons>) -> Node {
    Node::element("div").attr("class", "app").children([
        Node::element("nav").children([
            Node::link("/", "Home"),
            Node::link("/about", "About"),
            Node::link("/pokemons", "Pokemons"),
        ]),
        Node::element("main").child(Node::outlet()),
    ])
}

fn home(_: &ViewContext<'_, Pokemons>) -> Node {
    Node::element("h1").child(Node::text("Pokemon explorer"))
}

fn about(_: &ViewContext<'_, Pokemons>) -> Node {
    Node::fragment([
        Node::element("h1").child(Node::text("About")),
        Node::element("p").child(Node::text("Data from the public PokeAPI.")),
    ])
}

/// Renders whatever the loader produced; a failed load shows an empty list.
fn pokemon_list(ctx: &ViewContext<'_, Pokemons>) -> Node {
    let pokemons = ctx.data().map(Vec::as_slice).unwrap_or_default();
    Node::fragment([
        Node::element("h1").child(Node::text("Pokemons")),
        Node::element("ul")
            .attr("class", "pokemons")
            .children(pokemons.iter().map(|p| {
                Node::element("li").child(Node::link(p.url.clone(), p.name.clone()))
            })),
    ])
}

fn loading(_: &ViewContext<'_, Pokemons>) -> Node {
    Node::element("p")
        .attr("class", "loading")
        .child(Node::text("Loading..."))
}

fn not_found(ctx: &ViewContext<'_, Pokemons>) -> Node {
    Node::element("p")
        .attr("class", "not-found")
        .child(Node::text(format!("Nothing lives at {}.", ctx.path())))
}

async fn fetch_pokemons(client: Arc<dyn HttpClient>) -> Result<Pokemons, LoaderError> {
    let page: PokemonPage = fetch_json(client.as_ref(), POKEMON_ENDPOINT).await?;
    Ok(page.results)
}

/// Loader for `/pokemons`: one GET against [`POKEMON_ENDPOINT`].
pub fn pokemon_loader(
    client: Arc<dyn HttpClient>,
) -> impl Fn(LoaderArgs) -> LoaderFuture<Pokemons> + Send + Sync + 'static {
    move |_: LoaderArgs| fetch_pokemons(client.clone()).boxed()
}

pub fn routes(client: Arc<dyn HttpClient>) -> Result<RouteTable<Pokemons>, RouteTableError> {
    RouteTable::build(vec![RouteEntry::new("/", layout).children(vec![
        RouteEntry::index(home),
        RouteEntry::new("about", about),
        RouteEntry::new("pokemons", pokemon_list)
            .loader(pokemon_loader(client))
            .fallback(loading),
        RouteEntry::new("*", not_found),
    ])])
}

/// Router for the Pokemon demo, fetching through `client`.
pub fn pokemon_app(client: Arc<dyn HttpClient>) -> Result<Router<Pokemons>, RouteTableError> {
    Ok(Router::new(routes(client)?))
}

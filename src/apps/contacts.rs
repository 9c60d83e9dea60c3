//! Routing demo: a handful of static pages and a contact list with an
//! optional selected contact.
//!
//! | path              | view                                  |
//! |-------------------|---------------------------------------|
//! | `/`               | home                                  |
//! | `/about`          | about                                 |
//! | `/contact`        | contact form                          |
//! | `/contacts`       | contact list, nothing selected        |
//! | `/contacts/{id}`  | contact list with `id` selected       |
//! | anything else     | not found                             |

use crate::error::RouteTableError;
use crate::navigation::ViewContext;
use crate::route::{RouteEntry, RouteTable};
use crate::router::Router;
use crate::view::Node;

/// Parameter carrying the selected contact's id.
pub const CONTACT_ID: &str = "contactId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        id: 1,
        name: "Ada Lovelace",
        email: "ada@example.com",
        phone: "555-0101",
    },
    Contact {
        id: 2,
        name: "Alan Turing",
        email: "alan@example.com",
        phone: "555-0102",
    },
    Contact {
        id: 42,
        name: "Grace Hopper",
        email: "grace@example.com",
        phone: "555-0142",
    },
];

/// Which contact a `/contacts` path asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    None,
    Found(&'a Contact),
    Missing(u32),
}

/// Resolve the `contactId` parameter against `contacts`.
///
/// An absent or non-numeric id reads as `0`, and `0` means nothing is
/// selected.
pub fn select<'a>(contacts: &'a [Contact], ctx: &ViewContext<'_, ()>) -> Selection<'a> {
    match ctx.params().parse_or::<u32>(CONTACT_ID, 0) {
        0 => Selection::None,
        id => contacts
            .iter()
            .find(|c| c.id == id)
            .map(Selection::Found)
            .unwrap_or(Selection::Missing(id)),
    }
}

fn nav() -> Node {
    Node::element("nav").children([
        Node::link("/", "Home"),
        Node::link("/about", "About"),
        Node::link("/contact", "Contact"),
        Node::link("/contacts", "Contacts"),
    ])
}

fn page(title: &str, body: Node) -> Node {
    Node::fragment([
        nav(),
        Node::element("main")
            .child(Node::element("h1").child(Node::text(title)))
            .child(body),
    ])
}

fn home(_: &ViewContext<'_, ()>) -> Node {
    page(
        "Home",
        Node::element("p").child(Node::text("Welcome to the routing demo.")),
    )
}

fn about(_: &ViewContext<'_, ()>) -> Node {
    page(
        "About",
        Node::element("p").child(Node::text("Every page here is picked by the router.")),
    )
}

fn contact_form(_: &ViewContext<'_, ()>) -> Node {
    page(
        "Contact",
        Node::element("form").attr("method", "post").children([
            Node::element("input").attr("name", "email").attr("type", "email"),
            Node::element("textarea").attr("name", "message"),
            Node::element("button")
                .attr("type", "submit")
                .child(Node::text("Send")),
        ]),
    )
}

fn contact_list(ctx: &ViewContext<'_, ()>) -> Node {
    let list = Node::element("ul")
        .attr("class", "contacts")
        .children(CONTACTS.iter().map(|c| {
            Node::element("li").child(Node::link(format!("/contacts/{}", c.id), c.name))
        }));

    let detail = match select(CONTACTS, ctx) {
        Selection::None => Node::empty(),
        Selection::Found(c) => Node::element("article")
            .attr("class", "contact")
            .attr("data-id", c.id.to_string())
            .children([
                Node::element("h2").child(Node::text(c.name)),
                Node::element("p").child(Node::text(c.email)),
                Node::element("p").child(Node::text(c.phone)),
            ]),
        Selection::Missing(id) => Node::element("p")
            .attr("class", "not-found")
            .child(Node::text(format!("No contact with id {id}."))),
    };

    page("Contacts", Node::fragment([list, detail]))
}

fn not_found(ctx: &ViewContext<'_, ()>) -> Node {
    page(
        "Not found",
        Node::element("p")
            .attr("class", "not-found")
            .child(Node::text(format!("Nothing lives at {}.", ctx.path()))),
    )
}

pub fn routes() -> Result<RouteTable<()>, RouteTableError> {
    RouteTable::build(vec![
        RouteEntry::new("/", home),
        RouteEntry::new("/about", about),
        RouteEntry::new("/contact", contact_form),
        RouteEntry::new(format!("/contacts/:{CONTACT_ID}?"), contact_list),
        RouteEntry::new("*", not_found),
    ])
}

/// Router for the routing demo.
pub fn routing_app() -> Result<Router<()>, RouteTableError> {
    Ok(Router::new(routes()?))
}

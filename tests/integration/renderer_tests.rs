use mockall::{predicate::eq, Sequence};
use wayfinder::apps::contacts::routing_app;
use wayfinder::{create_test_spawner, NavigationState, Page, Renderer, TestMvuRuntime};

#[cfg_attr(test, mockall::automock)]
pub(crate) trait MountTarget {
    fn mount(&self, path: &str, heading: &str);
}

/// Renderer that hands each page's path and heading to a mount target.
struct HeadingRenderer<T: MountTarget> {
    target: T,
}

impl<T: MountTarget> Renderer<Page<()>> for HeadingRenderer<T> {
    fn render(&mut self, page: Page<()>) {
        let heading = page
            .node
            .find_all("h1")
            .first()
            .map(|h1| wayfinder::Node::Element((*h1).clone()).text_content())
            .unwrap_or_default();
        self.target.mount(&page.path, &heading);
        page.navigator.navigate(match page.path.as_str() {
            "/" => "/contacts/2",
            "/contacts/2" => "/missing",
            _ => return,
        });
    }
}

#[test]
fn given_navigations_emitted_from_props_should_mount_pages_in_order() {
    let mut seq = Sequence::new();
    let mut target = MockMountTarget::new();
    for (path, heading) in [
        ("/", "Home"),
        ("/contacts/2", "Contacts"),
        ("/missing", "Not found"),
    ] {
        target
            .expect_mount()
            .with(eq(path), eq(heading))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }

    let mut driver = TestMvuRuntime::new(
        NavigationState::at("/"),
        routing_app().unwrap(),
        HeadingRenderer { target },
        create_test_spawner(),
    )
    .run();
    driver.process_events();

    assert_eq!(driver.model().path, "/missing");
    assert_eq!(driver.model().seq, 3);
}

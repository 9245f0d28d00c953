// Example: drive a list with the controller and the headless scroll surface.
use std::cell::RefCell;
use std::rc::Rc;

use recycler::{Align, Extent, ListOptions, VirtualList};
use recycler_adapter::{Controller, SimNode, SimNodeFactory, SimViewport};

fn main() {
    let viewport = Rc::new(RefCell::new(SimViewport::new(Extent::new(180.0, 320.0))));
    let factory = Rc::new(RefCell::new(SimNodeFactory::new()));

    let mut list = VirtualList::new(ListOptions::new(500, 40.0).with_desired_visible_count(3));
    list.set_slot_factory(Rc::clone(&factory));
    list.set_layout_source(Rc::clone(&viewport));
    list.set_on_item_realized(Some(|node: &mut SimNode, index: usize| {
        node.label = Some(format!("Row {index}"));
    }));

    let mut c = Controller::from_list(list);
    if let Err(err) = c.set_enabled(true) {
        eprintln!("enable failed: {err}");
        return;
    }
    c.tick();
    println!("item_extent={}", c.list().item_extent());

    // Simulated wheel scrolling, a few pixels per frame.
    for _ in 0..60 {
        viewport.borrow_mut().scroll_by(7.0);
        c.on_scroll();
        c.tick();
    }
    println!("after wheel: {:?}", c.list().state());

    c.request_scroll_to_index(250, Align::Center);
    if let Some(to) = c.tick() {
        viewport.borrow_mut().scroll_to(to);
        c.on_scroll();
        c.tick();
    }
    println!("after scroll_to_index: window={:?}", c.list().window());
    c.list().for_each_active(|index, node| {
        println!("  {index:>3} node#{} {:?}", node.id, node.label);
    });

    c.teardown();
    let f = factory.borrow();
    println!("created={} destroyed={}", f.created(), f.destroyed());
}

// Example: minimal usage with an in-memory scroll surface.
use std::cell::RefCell;
use std::rc::Rc;

use recycler::{Align, Extent, LayoutSource, ListOptions, SlotFactory, SlotHandle, VirtualList};

#[derive(Debug, Default)]
struct Row {
    offset: f32,
    visible: bool,
    text: String,
}

impl SlotHandle for Row {
    fn set_offset(&mut self, main: f32) {
        self.offset = main;
    }

    fn set_extent(&mut self, _extent: Extent) {}

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

struct Rows;

impl SlotFactory<Row> for Rows {
    fn create_slot(&mut self) -> Option<Row> {
        Some(Row::default())
    }

    fn destroy_slot(&mut self, _slot: Row) {}
}

#[derive(Default)]
struct Surface {
    offset: f32,
    content: f32,
}

impl LayoutSource for Surface {
    fn viewport(&self) -> Extent {
        Extent::new(200.0, 320.0)
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn content_cross_extent(&self) -> f32 {
        320.0
    }

    fn apply_content_extent(&mut self, main: f32) {
        self.content = main;
    }
}

fn main() {
    let surface = Rc::new(RefCell::new(Surface::default()));

    let mut list = VirtualList::new(ListOptions::new(1_000_000, 40.0));
    list.set_slot_factory(Rows);
    list.set_layout_source(Rc::clone(&surface));
    list.set_on_item_realized(Some(|row: &mut Row, index: usize| {
        row.text = format!("Item {index}");
    }));
    if let Err(err) = list.initialize() {
        eprintln!("initialize failed: {err}");
        return;
    }

    list.tick();
    println!("content_extent={}", surface.borrow().content);
    println!("state={:?}", list.state());

    let off = list.scroll_to_index_offset(123_456, Align::Center);
    surface.borrow_mut().offset = off;
    list.on_scroll();
    list.tick();

    println!("after scroll_to_index: offset={off} window={:?}", list.window());
    list.for_each_active(|index, row| println!("  {index:>7} @ {:>10} {}", row.offset, row.text));

    list.teardown();
}

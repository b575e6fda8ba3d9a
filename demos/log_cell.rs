use anchorage::{
    ConstraintMap, LayoutItem, MemoryEngine, Priority, ViewItem, pin_edges, size_to,
};
use kurbo::{Insets, Size};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut engine = MemoryEngine::default();
    let cell = engine.add_guide("cell_margins");
    let content = engine.add_view("content");
    let date_view = engine.add_view("date_view");
    let type_label = engine.add_view("type_label");
    let value_label = engine.add_view("value_label");

    let mut required = pin_edges(&content, &cell, Insets::uniform(8.0));
    required.extend([
        date_view.leading().equal_to(content.leading()),
        date_view.top().equal_to(content.top()),
        date_view.bottom().equal_to(content.bottom()),
        type_label.leading().equal_to(date_view.trailing() + 10),
        type_label.first_baseline().equal_to(content.top() + 14),
        type_label.bottom().equal_to(value_label.top()),
        value_label.leading().equal_to(type_label.leading()),
        value_label.bottom().equal_to(content.bottom()),
    ]);

    let mut map = ConstraintMap::new()
        .with(Priority::REQUIRED, required)
        .with(Priority::DEFAULT_HIGH, size_to(&date_view, Size::new(80.0, 44.0)))
        .with(
            Priority::DEFAULT_LOW,
            [
                (type_label.trailing() + 10).less_or_equal(content.trailing()),
                type_label.height().equal_to(value_label.height()),
            ],
        );
    map.activate(&mut engine)?;

    for constraint in engine.active() {
        println!("{}", engine.describe(constraint));
    }
    println!("{}", engine.snapshot_json()?);
    Ok(())
}

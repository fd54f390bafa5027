//! Builds a few chains that share points and prints their lengths.
//!
//! Usage:
//! ```text
//! cargo run --example walkthrough
//! RUST_LOG=polychain=trace cargo run --example walkthrough
//! ```

use polychain::{Measure, Movable, Point, PointStore, PolygonalChain, Result, Segment};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polychain.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walkthrough=info".parse().unwrap_or_default())
        .add_directive("polychain=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = PointStore::new();
    let start = store.add_point(Point::origin());
    let waypoint = store.add_point(Point::new(3.0, 4.0));
    let end = store.add_point(Point::new(6.0, 0.0));

    let first_leg = Segment::new(start, waypoint);
    let mut chain = PolygonalChain::new(start, end);
    chain.add_midpoint(waypoint);

    println!("chain   {}", chain.render(&store)?);
    println!("leg     {}", first_leg.length(&store)?);
    println!("length  {}", chain.length(&store)?);

    // The waypoint is shared, so the segment sees the move too.
    waypoint.translate(&mut store, 0.0, -4.0)?;
    println!("chain   {}", chain.render(&store)?);
    println!("leg     {}", first_leg.length(&store)?);
    println!("length  {}", chain.length(&store)?);

    chain.translate(&mut store, 5.0, 10.0)?;
    println!("moved   {}", chain.render(&store)?);
    println!("length  {}", chain.length(&store)?);

    Ok(())
}

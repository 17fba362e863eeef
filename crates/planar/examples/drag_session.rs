//! Walk through one pointer drag and print the highlight flags per frame.
//!
//! Usage:
//!   cargo run -p planar --example drag_session

use nalgebra::vector;
use planar::prelude::*;

fn main() {
    let mut scene = Scene::with_shapes(vec![
        Shape::Rectangle(Rect::axis_aligned(vector![0.0, 0.0], 40.0, 20.0)),
        Shape::Triangle(IsoTriangle {
            base: vector![120.0, 0.0],
            apex: vector![120.0, 25.0],
        }),
        Shape::Circle(CircleShape {
            center: vector![0.0, 90.0],
            rim: vector![15.0, 90.0],
        }),
    ]);
    let mut session = DragSession::new();
    let held = session.pointer_down(&scene, vector![121.0, 1.0]);
    println!("picked {:?}", held);
    for step in 0..8 {
        let x = 121.0 - 12.0 * (step as f64 + 1.0);
        if let Err(err) = session.pointer_move(&mut scene, vector![x, 1.0]) {
            eprintln!("drag failed: {}", err);
            return;
        }
        println!("x={:6.1} highlight={:?}", x, scene.highlight());
    }
    session.pointer_up();
}

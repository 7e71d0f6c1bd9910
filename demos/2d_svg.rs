use kdnear::{KdTree, Point};
use plotters::prelude::*;
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "2d_nearest.svg";
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let mut rng = rand::thread_rng();
    let points: Vec<Point> = (0..1000)
        .map(|_| vec![rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)])
        .collect();

    let tree = KdTree::build(&points);
    let query = [50.0, 50.0];
    let neighbors = tree.nearest(&query, 25);

    // Draw bounding box
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)],
        BLACK.stroke_width(2),
    )))?;

    // Draw the point cloud
    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p[0], p[1]), 2, BLUE.mix(0.4).filled())),
    )?;

    // Highlight the neighbors and the query
    chart.draw_series(
        neighbors
            .iter()
            .map(|p| Circle::new((p[0], p[1]), 4, RED.filled())),
    )?;
    chart.draw_series(std::iter::once(Cross::new(
        (query[0], query[1]),
        8,
        BLACK.stroke_width(3),
    )))?;

    root.present()?;
    println!("Output saved to {}", filename);
    Ok(())
}

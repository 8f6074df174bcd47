#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]

use log::info;
use plotters::prelude::*;
use rand::Rng;
use strmap::{
    ChainingMap, QuadraticProbingMap, StringMap, find_mode,
    hashing::{HashFn, additive_hash, positional_hash},
};

// Starting size for every table in the comparison
const INITIAL_CAPACITY: usize = 53;
const KEY_COUNT: usize = 150;
// Print and sample every this many insertions
const SAMPLE_EVERY: usize = 25;
const MODE_SAMPLE_SIZE: usize = 1_000;

// Map variants to compare
const METHODS: [&str; 4] = [
    "Quadratic Probing (additive)",
    "Quadratic Probing (positional)",
    "Separate Chaining (additive)",
    "Separate Chaining (positional)",
];

/// Load factor and empty slot count after each sampled insertion
#[derive(Debug, Default)]
struct Samples {
    load_factor: Vec<f64>,
    empty_slots: Vec<usize>,
}

fn fill<M: StringMap<usize>>(mut map: M, keys: &[String], name: &str) -> Samples {
    let mut samples = Samples::default();

    for (i, key) in keys.iter().enumerate() {
        map.put(key.clone(), i * 100);

        if (i + 1) % SAMPLE_EVERY == 0 {
            println!(
                "  {name}: empty = {}, load = {:.2}, size = {}, capacity = {}",
                map.empty_slot_count(),
                map.load_factor(),
                map.len(),
                map.capacity()
            );
            samples.load_factor.push(map.load_factor());
            samples.empty_slots.push(map.empty_slot_count());
        }
    }

    samples
}

fn run(keys: &[String]) -> Vec<Samples> {
    let hashes: [HashFn; 2] = [additive_hash, positional_hash];
    let mut results = Vec::with_capacity(METHODS.len());

    for (hash_idx, &hash) in hashes.iter().enumerate() {
        results.push(fill(
            QuadraticProbingMap::new(INITIAL_CAPACITY, hash),
            keys,
            METHODS[hash_idx],
        ));
    }
    for (hash_idx, &hash) in hashes.iter().enumerate() {
        results.push(fill(ChainingMap::new(INITIAL_CAPACITY, hash), keys, METHODS[hash_idx + 2]));
    }

    results
}

fn plot(
    path: &str,
    caption: &str,
    y_desc: &str,
    series: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];

    let points = series.iter().map(Vec::len).max().unwrap_or(0);
    let max_y = series.iter().flat_map(|v| v.iter()).fold(0.0, |max: f64, &y| max.max(y)) * 1.1;

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..points, 0.0..max_y.max(1.0))?;

    chart
        .configure_mesh()
        .x_label_formatter(&|x| ((x + 1) * SAMPLE_EVERY).to_string())
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                series[method_idx].iter().enumerate().map(|(i, &y)| (i, y)),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            series[method_idx].iter().enumerate().map(|(i, &y)| Circle::new((i, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    info!("wrote {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = rand::rng();
    let keys: Vec<String> =
        (0..KEY_COUNT).map(|_| format!("str{}", rng.random_range(0..1_000_000))).collect();

    println!("Inserting {KEY_COUNT} random keys into tables of initial capacity {INITIAL_CAPACITY}");
    let results = run(&keys);

    let load_factors: Vec<Vec<f64>> = results.iter().map(|s| s.load_factor.clone()).collect();
    let empty_slots: Vec<Vec<f64>> =
        results.iter().map(|s| s.empty_slots.iter().map(|&n| n as f64).collect()).collect();

    plot("load_factor.png", "Load Factor While Filling", "Load Factor", &load_factors)?;
    plot("empty_slots.png", "Empty Slots While Filling", "Empty Slots", &empty_slots)?;

    let sample: Vec<String> =
        (0..MODE_SAMPLE_SIZE).map(|_| rng.random_range(0..20).to_string()).collect();
    let mode = find_mode(&sample);
    println!(
        "Mode of {MODE_SAMPLE_SIZE} random values in 0..20: {:?} ({} times each)",
        mode.values, mode.frequency
    );

    println!("Generated plot images: load_factor.png, empty_slots.png");

    Ok(())
}

use grid_bfs::{Cell, GridConfig};

// In this example a path is found on a grid with shape
// ......
// .S#...
// ..#...
// ..#E..
// ......
// S marks the start
// E marks the end
fn main() {
    let config = GridConfig::new(5, 4, Cell::new(1, 1), Cell::new(3, 3))
        .with_obstacles([Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2)]);
    print!("{}", config);
    for allow_diagonal in [false, true] {
        let path = config.clone().with_diagonal(allow_diagonal).shortest_path();
        if path.is_empty() {
            println!("No path exists (diagonal: {allow_diagonal})");
            continue;
        }
        println!(
            "A path of {} steps has been found (diagonal: {allow_diagonal}):",
            path.len() - 1
        );
        for p in path {
            println!("{}", p);
        }
    }
}

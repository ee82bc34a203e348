use grid_bfs::PathBuffers;

// Drives the search the way a sandboxed host does: write the encoded grid into the input
// buffer, call the entry point with its length and read (row, col) pairs from the output buffer.
fn main() {
    let mut buffers = PathBuffers::new();
    // diagonal, width, height, start, end, then one obstacle at (1, 2)
    let input = [1, 5, 5, 1, 1, 1, 3, 1, 2];
    buffers.input_mut()[..input.len()].copy_from_slice(&input);
    match buffers.shortest_path(input.len()) {
        Ok(written) => {
            println!("{} bytes written: {:?}", written, &buffers.output()[..written]);
            for cell in buffers.read_path(written) {
                println!("{}", cell);
            }
        }
        Err(e) => eprintln!("Search failed: {}", e),
    }
}

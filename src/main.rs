/// Binary entrypoint for the `hexcast` executable.
///
/// Keeps the binary thin: all logic lives in the `hexcast_lib` crate so
/// tests can import library functions directly.
fn main() {
    hexcast_lib::run();
}

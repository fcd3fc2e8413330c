fn main() {
    pcp::term::main();
}

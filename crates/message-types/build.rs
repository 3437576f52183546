fn main() {
    println!("cargo:rerun-if-changed=proto/message.proto");

    // Pure-Rust parser, so no protoc is needed at build time
    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["proto"])
        .input("proto/message.proto")
        .cargo_out_dir("protos")
        .run_from_script();
}

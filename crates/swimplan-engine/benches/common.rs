// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_plan(sessions: usize) -> String {
    let base = "Echauffement\n400 souple\n200 4N educ\n\nx3\n\nS1 : vitesse\n4x50 Cr V2 r:20''\n#25 educ rattrapé\n#25 NC\n+ 100 dos souple\n\n6x100 Br V1 @1'45/1'50 palmes (coulée max)\nTotal : 600\n\n";
    base.repeat(sessions)
}

#[allow(dead_code)]
pub fn generate_inline_blocks(count: usize) -> String {
    let mut content = String::new();

    for set in 0..count {
        content.push_str(&format!(
            "Série {set}\nx{} (4x50 Pap V3 d:1' + 100 dos palmes tuba) r:2'\n8x25 Max ↗ CB\n\n",
            set % 4 + 1
        ));
    }

    content
}

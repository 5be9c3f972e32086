use calc::mach::Runtime;

pub fn exec(runtime: &mut Runtime, line: &str) -> String {
    runtime.enter(line).to_string()
}

pub fn exec_all(runtime: &mut Runtime, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        let out = exec(runtime, line);
        if !out.is_empty() {
            s.push_str(&format!("{}\n", out));
        }
    }
    s
}

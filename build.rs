use std::env;
use std::fs;
use std::path::Path;

/// 模板源码转换：去掉 HTML 注释、折叠行首缩进
///
/// 这是打包前对页面模板做的 source-to-source 变换，
/// 生成的常量通过 include! 嵌入二进制。
fn transform(source: &str) -> String {
    let stripped = strip_comments(source);

    let mut out = String::with_capacity(stripped.len());
    for line in stripped.lines() {
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            continue;
        }
        out.push_str(line.trim_start());
        out.push('\n');
    }
    out
}

/// 去掉 <!-- ... --> 注释（允许跨行）
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    loop {
        match rest.find("<!--") {
            Some(start) => {
                out.push_str(&rest[..start]);
                match rest[start..].find("-->") {
                    Some(end) => rest = &rest[start + end + 3..],
                    None => break, // 未闭合的注释，丢弃剩余部分
                }
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}

fn const_name(stem: &str) -> String {
    stem.replace('-', "_").to_uppercase()
}

fn main() {
    println!("cargo:rerun-if-changed=templates");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");

    let mut entries: Vec<_> = fs::read_dir("templates")
        .expect("Failed to read templates directory")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "html"))
        .collect();
    entries.sort();

    let mut generated = String::from("// Generated by build.rs, do not edit.\n");
    for path in entries {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .expect("Template filename is not valid UTF-8");
        let source = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read template {}: {}", path.display(), e));
        let transformed = transform(&source);
        generated.push_str(&format!(
            "pub const {}: &str = {:?};\n",
            const_name(stem),
            transformed
        ));
        println!("cargo:rerun-if-changed={}", path.display());
    }

    fs::write(Path::new(&out_dir).join("templates.rs"), generated)
        .expect("Failed to write generated templates");
}

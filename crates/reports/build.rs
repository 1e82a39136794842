use minify_js::{minify, Session, TopLevelMode};
use sha2::{Digest, Sha256};
use std::{env, fs, path::Path};
use walkdir::WalkDir;

fn main() {
    let Ok(manifest) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let templates = Path::new(&manifest).join("src/templates");
    // Written into the crate so `ui_dir` can point at it without a copy step
    let output = Path::new(&manifest).join("static");

    if !templates.exists() {
        return;
    }

    println!("cargo:rerun-if-changed={}", templates.display());
    for entry in WalkDir::new(&templates).into_iter().filter_map(|e| e.ok()) {
        let ext = entry.path().extension().and_then(|e| e.to_str());
        if matches!(ext, Some("js") | Some("css")) {
            println!("cargo:rerun-if-changed={}", entry.path().display());
        }
    }

    let _ = fs::create_dir_all(&output);

    build_js(&templates, &output);
    build_css(&templates, &output);
}

fn sources(templates: &Path, extension: &str) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = WalkDir::new(templates)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|e| e == extension))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

fn build_js(templates: &Path, output: &Path) {
    let mut combined = String::new();
    for file in sources(templates, "js") {
        if let Ok(content) = fs::read_to_string(&file) {
            let rel = file.strip_prefix(templates).unwrap_or(&file);
            combined.push_str(&format!("\n// === {} ===\n", rel.display()));
            combined.push_str(&content);
            combined.push('\n');
        }
    }

    if combined.trim().is_empty() {
        return;
    }

    let minified = try_minify_js(&combined).unwrap_or_else(|| combined.clone());
    write_hashed(output, "app.", ".min.js", &minified);

    if env::var("PROFILE").map_or(true, |p| p != "release") {
        let _ = fs::write(output.join("app.debug.js"), &combined);
    }

    println!("cargo:warning=Built app.min.js ({} bytes)", minified.len());
}

fn build_css(templates: &Path, output: &Path) {
    let mut combined = String::new();

    // styles.css holds the base rules and goes first
    let base = templates.join("styles.css");
    if let Ok(content) = fs::read_to_string(&base) {
        combined.push_str(&content);
        combined.push('\n');
    }

    for file in sources(templates, "css").into_iter().filter(|f| *f != base) {
        if let Ok(content) = fs::read_to_string(&file) {
            if content.trim().is_empty() {
                continue;
            }
            let rel = file.strip_prefix(templates).unwrap_or(&file);
            combined.push_str(&format!("\n/* === {} === */\n", rel.display()));
            combined.push_str(&content);
            combined.push('\n');
        }
    }

    if combined.trim().is_empty() {
        return;
    }

    let minified = minify_css(&combined);
    write_hashed(output, "styles.", ".min.css", &minified);

    println!(
        "cargo:warning=Built styles.min.css ({} bytes)",
        minified.len()
    );
}

/// Writes `<prefix>min<suffix>` plus a copy named after the content hash
fn write_hashed(output: &Path, prefix: &str, suffix: &str, content: &str) {
    let hash = hex::encode(Sha256::digest(content.as_bytes()));
    let short = &hash[..8];

    clean_old_hash_files(output, prefix, suffix, short);

    let _ = fs::write(output.join(format!("{}{}{}", prefix, short, suffix)), content);
    let _ = fs::write(output.join(format!("{}{}", prefix.trim_end_matches('.'), suffix)), content);
}

fn try_minify_js(source: &str) -> Option<String> {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    let src = source.to_string();
    catch_unwind(AssertUnwindSafe(|| {
        let session = Session::new();
        let mut out = Vec::new();
        minify(&session, TopLevelMode::Global, src.as_bytes(), &mut out).ok()?;
        String::from_utf8(out).ok()
    }))
    .ok()?
}

fn minify_css(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut in_comment = false;
    let mut chars = css.chars().peekable();

    while let Some(c) = chars.next() {
        if in_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_comment = false;
            }
            continue;
        }
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            in_comment = true;
            continue;
        }
        if c.is_whitespace() {
            if !out.ends_with(|ch: char| ch.is_whitespace() || "{:;,".contains(ch))
                && chars.peek().is_some_and(|&n| !"{}:;,".contains(n))
            {
                out.push(' ');
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Removes `<prefix><8 hex chars><suffix>` files left from earlier builds
fn clean_old_hash_files(output: &Path, prefix: &str, suffix: &str, current_hash: &str) {
    let Ok(entries) = fs::read_dir(output) else {
        return;
    };
    for entry in entries.filter_map(|e| e.ok()) {
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if name.starts_with(prefix)
            && name.ends_with(suffix)
            && name.len() > prefix.len() + suffix.len()
        {
            let hash_part = &name[prefix.len()..name.len() - suffix.len()];
            if hash_part.len() == 8
                && hash_part.chars().all(|c| c.is_ascii_hexdigit())
                && hash_part != current_hash
            {
                let _ = fs::remove_file(entry.path());
            }
        }
    }
}

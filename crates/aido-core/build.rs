fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    println!("cargo:rerun-if-changed=src/preprompt/default_preprompts.toml");

    parse_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );

    let preprompts = parse_toml(
        "src/preprompt/default_preprompts.toml",
        include_str!("src/preprompt/default_preprompts.toml"),
    );
    let entries = preprompts
        .get("preprompt")
        .and_then(|v| v.as_array())
        .unwrap_or_else(|| panic!("default_preprompts.toml has no [[preprompt]] entries"));
    for entry in entries {
        for key in ["trigger", "instruction"] {
            if entry.get(key).and_then(|v| v.as_str()).is_none() {
                panic!("default preprompt entry missing `{key}`: {entry}");
            }
        }
    }
}

fn parse_toml(path: &str, content: &str) -> toml::Value {
    content
        .parse::<toml::Value>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

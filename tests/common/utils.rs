use bounds_header::SceneNode;

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    base.join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

pub fn node(name: &str) -> SceneNode {
    SceneNode::leaf(name, 0.0, 0.0, 1.0, 1.0)
}

pub fn frame(name: &str, children: Vec<SceneNode>) -> SceneNode {
    node(name).with_children(children)
}

/// Identifiers of the declaration block, in output order.
pub fn declared_identifiers(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|l| l.strip_prefix("extern const float "))
        .filter_map(|l| l.strip_suffix("[4];"))
        .map(str::to_string)
        .collect()
}

/// Identifiers of the definition block, in output order.
pub fn defined_identifiers(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|l| l.strip_prefix("const float "))
        .filter_map(|l| l.split_once("[4] = "))
        .map(|(id, _)| id.to_string())
        .collect()
}

use super::*;
use pretty_assertions::assert_eq;

fn number(text: &str) -> AstNode {
    AstNode::leaf(tags::NUMBER, text, Span::DUMMY)
}

fn sexpr(inner: Vec<AstNode>) -> AstNode {
    let mut children = vec![AstNode::leaf(tags::CHAR, "(", Span::DUMMY)];
    children.extend(inner);
    children.push(AstNode::leaf(tags::CHAR, ")", Span::DUMMY));
    AstNode::branch(tags::SEXPR, children, Span::DUMMY)
}

#[test]
fn test_root_adds_boundary_markers() {
    let root = AstNode::root(vec![number("1")], Span::new(0, 1));
    assert!(root.is_root());
    assert_eq!(root.children().len(), 3);
    assert_eq!(root.children()[0].tag(), tags::REGEX);
    assert_eq!(root.children()[2].tag(), tags::REGEX);
}

#[test]
fn test_expressions_skip_noise() {
    let node = sexpr(vec![number("1"), number("2")]);
    let contents: Vec<&str> = node.expressions().map(AstNode::contents).collect();
    assert_eq!(contents, vec!["1", "2"]);
}

#[test]
fn test_has_rule_matches_fragment() {
    let node = number("7");
    assert!(node.has_rule(tags::NUMBER_RULE));
    assert!(!node.has_rule(tags::SYMBOL_RULE));
}

#[test]
fn test_delimiter_leaf_is_noise_regardless_of_tag() {
    assert!(AstNode::leaf("anything", "{", Span::DUMMY).is_structural_noise());
    assert!(!AstNode::leaf(tags::SYMBOL, "+", Span::DUMMY).is_structural_noise());
}

#[test]
fn test_display_outline() {
    let root = AstNode::root(vec![sexpr(vec![number("1")])], Span::DUMMY);
    let expected = "\
>
  regex
  expr|sexpr|>
    char '('
    expr|number|regex '1'
    char ')'
  regex
";
    assert_eq!(root.to_string(), expected);
}

#[test]
fn test_drop_deep_tree() {
    let mut node = number("1");
    for _ in 0..200_000 {
        node = sexpr(vec![node]);
    }
    assert_eq!(node.expressions().count(), 1);
    drop(node);
}

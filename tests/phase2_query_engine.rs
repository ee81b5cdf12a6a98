//! Phase 2 tests: query filtering, direction, deferred resolution and sub-queries.

use fluent_graph::engine::Query;
use fluent_graph::graph::{Direction, Graph};
use fluent_graph::types::{GraphError, Node, TypeFilter};

fn names(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.name().to_string()).collect()
}

/// John Cleese and Michael Palin both acted in The Life of Brian.
fn python_graph() -> Graph {
    let mut graph = Graph::new();
    let john = graph.add(Node::new("John Cleese"));
    let brian = graph.add(Node::new("The Life of Brian"));
    let michael = graph.add(Node::new("Michael Palin"));
    graph.add_relationship(john, "Acted In", brian).unwrap();
    graph.add_relationship(michael, "Acted In", brian).unwrap();
    graph
}

// ==================== Single-hop Tests ====================

#[test]
fn test_can_query_relationship() {
    let mut graph = Graph::new();
    let john = graph.add(Node::new("John Cleese"));
    let brian = graph.add(Node::new("The Life of Brian"));
    graph.add_relationship(john, "Acted In", brian).unwrap();

    let acted_in = graph
        .query_from("John Cleese")
        .related_by("Acted In")
        .execute()
        .unwrap();
    assert_eq!(names(&acted_in), vec!["The Life of Brian"]);
}

#[test]
fn test_can_query_backwards() {
    let graph = python_graph();
    let actors = graph
        .query_from("The Life of Brian")
        .related_by_reverse("Acted In")
        .execute()
        .unwrap();
    assert_eq!(names(&actors), vec!["John Cleese", "Michael Palin"]);
}

#[test]
fn test_forward_and_backward_are_symmetric() {
    let mut graph = Graph::new();
    let a = graph.add(Node::new("a"));
    let b = graph.add(Node::new("b"));
    graph.add_relationship(a, "r", b).unwrap();

    let forward = graph.query_from("a").related_by("r").execute().unwrap();
    assert_eq!(names(&forward), vec!["b"]);
    let backward = graph
        .query_from("b")
        .related_by_reverse("r")
        .execute()
        .unwrap();
    assert_eq!(names(&backward), vec!["a"]);
}

#[test]
fn test_can_filter_by_node_type() {
    let mut graph = Graph::new();
    let john = graph.add(Node::new("John Cleese"));
    let brian = graph.add(Node::typed("The Life of Brian", "Film"));
    let fawlty = graph.add(Node::typed("Fawlty Towers", "TV Show"));
    graph.add_relationship(john, "Acted In", brian).unwrap();
    graph.add_relationship(john, "Acted In", fawlty).unwrap();

    let shows = graph
        .query_from("John Cleese")
        .related_by("Acted In")
        .to_node_type("TV Show")
        .execute()
        .unwrap();
    assert_eq!(names(&shows), vec!["Fawlty Towers"]);

    let everything = graph
        .query_from("John Cleese")
        .related_by("Acted In")
        .execute()
        .unwrap();
    assert_eq!(names(&everything), vec!["The Life of Brian", "Fawlty Towers"]);
}

#[test]
fn test_untyped_node_never_matches_explicit_type() {
    let mut graph = Graph::new();
    let a = graph.add(Node::new("a"));
    let b = graph.add(Node::new("b"));
    graph.add_relationship(a, "r", b).unwrap();

    let typed = graph.query_from("a").to_node_type("Film").execute().unwrap();
    assert!(typed.is_empty());
    let star = graph.query_from("a").to_node_type("*").execute().unwrap();
    assert!(star.is_empty());
    let any = graph.query_from("a").any_node_type().execute().unwrap();
    assert_eq!(names(&any), vec!["b"]);
}

#[test]
fn test_default_query_follows_every_relationship_type() {
    let mut graph = Graph::new();
    let john = graph.add(Node::new("John Cleese"));
    let brian = graph.add(Node::new("The Life of Brian"));
    let fawlty = graph.add(Node::new("Fawlty Towers"));
    graph.add_relationship(john, "Acted In", brian).unwrap();
    graph.add_relationship(john, "Wrote", fawlty).unwrap();

    let all = graph.query_from("John Cleese").execute().unwrap();
    assert_eq!(names(&all), vec!["The Life of Brian", "Fawlty Towers"]);

    let reset = graph
        .query_from("John Cleese")
        .related_by("Wrote")
        .any_relationship()
        .execute()
        .unwrap();
    assert_eq!(reset.len(), 2);
}

#[test]
fn test_unmatched_relationship_type_is_empty() {
    let graph = python_graph();
    let none = graph
        .query_from("John Cleese")
        .related_by("Directed")
        .execute()
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_duplicate_relationship_returns_target_twice() {
    let mut graph = Graph::new();
    let a = graph.add(Node::new("a"));
    let b = graph.add(Node::new("b"));
    graph.add_relationship(a, "r", b).unwrap();
    graph.add_relationship(a, "r", b).unwrap();

    let results = graph.query_from("a").related_by("r").execute().unwrap();
    assert_eq!(names(&results), vec!["b", "b"]);
    assert_eq!(graph.query_from("a").count().unwrap(), 2);
}

#[test]
fn test_last_setting_wins() {
    let graph = python_graph();
    let query = graph
        .query_from("The Life of Brian")
        .related_by("Wrote")
        .forward()
        .related_by("Acted In")
        .backward();
    assert_eq!(query.spec().relationship, TypeFilter::exactly("Acted In"));
    assert_eq!(query.spec().direction, Direction::Backward);
    assert_eq!(query.execute().unwrap().len(), 2);
}

#[test]
fn test_query_is_re_executable() {
    let mut graph = Graph::new();
    let a = graph.add(Node::new("a"));
    let b = graph.add(Node::new("b"));
    graph.add_relationship(a, "r", b).unwrap();

    let query = graph.query_from("a");
    let first = query.execute().unwrap();
    let second = query.execute().unwrap();
    assert_eq!(first, second);
    assert_eq!(graph.relationship_count(), 1);
}

// ==================== Deferred Resolution Tests ====================

#[test]
fn test_missing_start_fails_only_on_execute() {
    let graph = Graph::new();
    let query = graph.query_from("Not Yet Added").related_by("r");
    let err = query.execute().unwrap_err();
    assert_eq!(err, GraphError::NotFound("Not Yet Added".to_string()));
}

#[test]
fn test_spec_built_before_node_exists() {
    let mut graph = Graph::new();
    let spec = graph.query_from("Not Yet Added").related_by("r").spec().clone();

    let start = graph.add(Node::new("Not Yet Added"));
    let other = graph.add(Node::new("other"));
    graph.add_relationship(start, "r", other).unwrap();

    let results = Query::from_spec(&graph, spec).execute().unwrap();
    assert_eq!(names(&results), vec!["other"]);
}

#[test]
fn test_query_resolves_latest_registration() {
    let mut graph = Graph::new();
    let old = graph.add(Node::new("a"));
    let b = graph.add(Node::new("b"));
    graph.add_relationship(old, "r", b).unwrap();

    // Re-adding "a" starts from a node with no relationships.
    graph.add(Node::new("a"));
    assert!(graph.query_from("a").execute().unwrap().is_empty());

    // The old node is still b's neighbour.
    let back = graph.query_from("b").backward().execute().unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].id(), old);
}

// ==================== Sub-query Tests ====================

#[test]
fn test_can_find_multi_step_queries() {
    let graph = python_graph();
    let co_stars = graph
        .query_from("John Cleese")
        .related_by("Acted In")
        .execute_sub_query(|q| q.related_by_reverse("Acted In"))
        .unwrap();
    assert_eq!(names(&co_stars), vec!["Michael Palin"]);
}

#[test]
fn test_sub_query_deduplicates() {
    let mut graph = Graph::new();
    let john = graph.add(Node::new("John Cleese"));
    let michael = graph.add(Node::new("Michael Palin"));
    let brian = graph.add(Node::new("The Life of Brian"));
    let grail = graph.add(Node::new("Holy Grail"));
    for film in [brian, grail] {
        graph.add_relationship(john, "Acted In", film).unwrap();
        graph.add_relationship(michael, "Acted In", film).unwrap();
        graph.add_relationship(michael, "Acted In", film).unwrap();
    }

    let co_stars = graph
        .query_from("John Cleese")
        .related_by("Acted In")
        .execute_sub_query(|q| q.related_by_reverse("Acted In"))
        .unwrap();
    assert_eq!(names(&co_stars), vec!["Michael Palin"]);
}

#[test]
fn test_sub_query_first_seen_order() {
    let mut graph = Graph::new();
    let start = graph.add(Node::new("start"));
    let hub1 = graph.add(Node::new("hub1"));
    let hub2 = graph.add(Node::new("hub2"));
    let x = graph.add(Node::new("x"));
    let y = graph.add(Node::new("y"));
    let z = graph.add(Node::new("z"));
    graph.add_relationship(start, "to", hub1).unwrap();
    graph.add_relationship(start, "to", hub2).unwrap();
    graph.add_relationship(hub1, "next", y).unwrap();
    graph.add_relationship(hub1, "next", x).unwrap();
    graph.add_relationship(hub2, "next", x).unwrap();
    graph.add_relationship(hub2, "next", z).unwrap();

    let second = graph
        .query_from("start")
        .execute_sub_query(|q| q.related_by("next"))
        .unwrap();
    assert_eq!(names(&second), vec!["y", "x", "z"]);
}

#[test]
fn test_sub_query_excludes_start_node() {
    let mut graph = Graph::new();
    let a = graph.add(Node::new("a"));
    let b = graph.add(Node::new("b"));
    graph.add_relationship(a, "r", b).unwrap();
    graph.add_relationship(b, "r", a).unwrap();

    let back_home = graph
        .query_from("a")
        .execute_sub_query(|q| q.related_by("r"))
        .unwrap();
    assert!(back_home.is_empty());
}

#[test]
fn test_sub_query_applies_type_filter() {
    let mut graph = Graph::new();
    let john = graph.add(Node::typed("John Cleese", "Person"));
    let brian = graph.add(Node::typed("The Life of Brian", "Film"));
    let michael = graph.add(Node::typed("Michael Palin", "Person"));
    let studio = graph.add(Node::typed("HandMade Films", "Company"));
    graph.add_relationship(john, "Acted In", brian).unwrap();
    graph.add_relationship(michael, "Acted In", brian).unwrap();
    graph.add_relationship(studio, "Produced", brian).unwrap();

    let people = graph
        .query_from("John Cleese")
        .related_by("Acted In")
        .execute_sub_query(|q| q.backward().to_node_type("Person"))
        .unwrap();
    assert_eq!(names(&people), vec!["Michael Palin"]);
}

#[test]
fn test_sub_query_missing_start_fails() {
    let graph = Graph::new();
    let err = graph
        .query_from("ghost")
        .execute_sub_query(|q| q)
        .unwrap_err();
    assert_eq!(err, GraphError::NotFound("ghost".to_string()));
}

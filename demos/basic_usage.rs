//! Basic build -> link -> query flow.

use fluent_graph::*;

fn main() -> GraphResult<()> {
    env_logger::init();

    let mut graph = Graph::new();
    let john = graph.add(Node::new("John Cleese"));
    let michael = graph.add(Node::new("Michael Palin"));
    let brian = graph.add(Node::typed("The Life of Brian", "Film"));
    let fawlty = graph.add(Node::typed("Fawlty Towers", "TV Show"));

    graph.add_relationship(john, "Acted In", brian)?;
    graph.add_relationship(john, "Acted In", fawlty)?;
    graph.add_relationship(michael, "Acted In", brian)?;

    println!(
        "Graph created with {} nodes and {} relationships",
        graph.node_count(),
        graph.relationship_count()
    );

    let shows = graph
        .query_from("John Cleese")
        .related_by("Acted In")
        .to_node_type("TV Show")
        .execute()?;
    println!("TV shows with John Cleese:");
    for node in &shows {
        println!("  {}", node.name());
    }

    let actors = graph
        .query_from("The Life of Brian")
        .related_by_reverse("Acted In")
        .execute()?;
    println!("Cast of The Life of Brian:");
    for node in &actors {
        println!("  {}", node.name());
    }

    let co_stars = graph
        .query_from("John Cleese")
        .related_by("Acted In")
        .execute_sub_query(|q| q.related_by_reverse("Acted In"))?;
    println!("Worked with John Cleese:");
    for node in &co_stars {
        println!("  {}", node.name());
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&graph.info_json()).unwrap_or_default()
    );
    Ok(())
}

use netroute::{GraphSession, RoutingConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Netroute v{}", netroute::version());
    println!("==========================================");
    println!();

    demo_network()
}

fn demo_network() -> anyhow::Result<()> {
    println!("=== Demo: five-router network ===");
    let mut session = GraphSession::new();

    let routers: Vec<_> = (0..5).map(|_| session.add_node()).collect();
    let links = [
        (0, 1, Some("4")),
        (0, 2, Some("1")),
        (2, 1, Some("2")),
        (1, 3, Some("5")),
        (2, 3, Some("8")),
        (3, 4, None),
    ];
    for (a, b, label) in links {
        session.connect(routers[a], routers[b], label.map(Into::into))?;
        println!(
            "✓ Link {} -- {} (weight {})",
            a,
            b,
            label.unwrap_or("unset")
        );
    }

    let outcome = session.run(routers[0], &RoutingConfig::default())?;

    println!("\nDijkstra from node {}:\n", outcome.source);
    println!("{}", outcome.dijkstra_report);
    println!("Distance vector ({} rounds):\n", outcome.distance_vector.iterations);
    println!("{}", outcome.distance_vector_report);

    if let Some(path) = outcome.dijkstra.path_to(routers[4]) {
        let hops: Vec<String> = path.iter().map(|n| n.to_string()).collect();
        println!("Shortest path 0 -> 4: {}", hops.join(" -> "));
    }

    Ok(())
}

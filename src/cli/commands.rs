//! CLI command implementations.
//!
//! Each command replays a scripted sequence of operations against a fresh
//! workbench, then prints the resulting snapshot and the operation log.

use std::path::Path;

use crate::config::VisualizerConfig;
use crate::engine::Workbench;
use crate::graph::TraversalKind;
use crate::types::{VizError, VizResult};

/// Parse a `key=value` hash table entry.
pub fn parse_entry(s: &str) -> VizResult<(i64, String)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| VizError::InvalidInput(format!("expected key=value, got '{}'", s)))?;
    let key = key
        .trim()
        .parse::<i64>()
        .map_err(|_| VizError::InvalidInput(format!("invalid key '{}'", key.trim())))?;
    Ok((key, value.trim().to_string()))
}

/// Parse a `u-v` edge.
pub fn parse_edge(s: &str) -> VizResult<(usize, usize)> {
    let (u, v) = s
        .split_once('-')
        .ok_or_else(|| VizError::InvalidInput(format!("expected u-v, got '{}'", s)))?;
    let parse = |t: &str| {
        t.trim()
            .parse::<usize>()
            .map_err(|_| VizError::InvalidInput(format!("invalid vertex '{}'", t.trim())))
    };
    Ok((parse(u)?, parse(v)?))
}

/// Write the default configuration to `path`.
pub fn cmd_config(path: &Path) -> VizResult<()> {
    VisualizerConfig::default().save(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Insert into and extract from a heap.
pub fn cmd_heap(
    bench: &mut Workbench,
    insert: &[i64],
    extract: usize,
    json: bool,
) -> VizResult<()> {
    let heap = bench.heap();
    for &value in insert {
        heap.insert(value);
    }
    let mut extracted = Vec::with_capacity(extract);
    for _ in 0..extract {
        match heap.extract_root() {
            Some(v) => extracted.push(v),
            None => break,
        }
    }

    if json {
        let out = serde_json::json!({
            "order": heap.order().name(),
            "array": heap.as_slice(),
            "extracted": extracted,
            "log": log_messages(bench),
        });
        print_json(&out);
    } else {
        println!("Heap ({}): {:?}", heap.order().name(), heap.as_slice());
        if !extracted.is_empty() {
            println!("Extracted: {:?}", extracted);
        }
        print_log(bench);
    }
    Ok(())
}

/// Insert into and delete from an AVL tree.
pub fn cmd_avl(bench: &mut Workbench, insert: &[i64], delete: &[i64], json: bool) -> VizResult<()> {
    let tree = bench.tree();
    for &value in insert {
        tree.insert(value);
    }
    for &value in delete {
        tree.delete(value);
    }

    if json {
        let out = serde_json::json!({
            "inorder": tree.inorder_traversal(),
            "height": tree.height(),
            "root": tree.root_value(),
            "nodes": tree.node_views(),
            "log": log_messages(bench),
        });
        print_json(&out);
    } else {
        println!("In-order: {:?}", tree.inorder_traversal());
        println!("Height: {}", tree.height());
        for view in tree.node_views() {
            println!(
                "{}{} (h={}, bf={})",
                "  ".repeat(view.depth),
                view.value,
                view.height,
                view.balance_factor
            );
        }
        print_log(bench);
    }
    Ok(())
}

/// Put, remove and look up hash table entries.
pub fn cmd_hash(
    bench: &mut Workbench,
    put: &[(i64, String)],
    remove: &[i64],
    get: &[i64],
    json: bool,
) -> VizResult<()> {
    let table = bench.table();
    for (key, value) in put {
        table.insert(*key, value.clone());
    }
    for &key in remove {
        table.remove(key);
    }
    let lookups: Vec<(i64, Option<String>)> = get
        .iter()
        .map(|&k| (k, table.search(k).cloned()))
        .collect();

    if json {
        let out = serde_json::json!({
            "bucket_count": table.bucket_count(),
            "buckets": table.snapshot(),
            "lookups": lookups,
            "log": log_messages(bench),
        });
        print_json(&out);
    } else {
        println!(
            "Hash table: {} entries in {} buckets",
            table.len(),
            table.bucket_count()
        );
        for bucket in table.snapshot() {
            let chain: Vec<String> = bucket
                .entries
                .iter()
                .map(|(k, v)| format!("{} => {:?}", k, v))
                .collect();
            println!("  [{}] {}", bucket.index, chain.join(" -> "));
        }
        for (key, found) in &lookups {
            match found {
                Some(v) => println!("search({}) = {:?}", key, v),
                None => println!("search({}) = not found", key),
            }
        }
        print_log(bench);
    }
    Ok(())
}

/// Add edges and print both traversals from `start`.
pub fn cmd_graph(
    bench: &mut Workbench,
    edges: &[(usize, usize)],
    start: usize,
    json: bool,
) -> VizResult<()> {
    let graph = bench.graph();
    for &(u, v) in edges {
        graph.add_edge(u, v);
    }
    let bfs = graph.traverse(TraversalKind::Bfs, start);
    let dfs = graph.traverse(TraversalKind::Dfs, start);

    if json {
        let out = serde_json::json!({
            "vertex_count": graph.vertex_count(),
            "edges": graph.edges(),
            "adjacency": graph.adjacency(),
            "bfs": bfs,
            "dfs": dfs,
            "log": log_messages(bench),
        });
        print_json(&out);
    } else {
        println!(
            "Graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        for (vertex, neighbors) in graph.adjacency().iter().enumerate() {
            println!("  {}: {:?}", vertex, neighbors);
        }
        println!("BFS({}): {:?}", start, bfs);
        println!("DFS({}): {:?}", start, dfs);
        print_log(bench);
    }
    Ok(())
}

/// Push values at the head of a linked list.
pub fn cmd_list(bench: &mut Workbench, push: &[i64], json: bool) -> VizResult<()> {
    let list = bench.list();
    for &value in push {
        list.insert_at_head(value)?;
    }

    if json {
        let out = serde_json::json!({
            "values": list.to_vec(),
            "log": log_messages(bench),
        });
        print_json(&out);
    } else {
        if list.is_empty() {
            println!("List is Empty. Insert a value.");
        } else {
            let chain: Vec<String> = list.to_vec().iter().map(|v| v.to_string()).collect();
            println!("{} -> null", chain.join(" -> "));
        }
        print_log(bench);
    }
    Ok(())
}

fn log_messages(bench: &Workbench) -> Vec<String> {
    let log = bench.log();
    let log = log.borrow();
    log.entries().map(|e| e.event.message.clone()).collect()
}

fn print_log(bench: &Workbench) {
    let log = bench.log();
    let log = log.borrow();
    println!("Log:");
    for entry in log.latest_first() {
        println!("  {:<7} {}", entry.event.level.name(), entry.render_line());
    }
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

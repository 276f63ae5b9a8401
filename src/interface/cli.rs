use crate::domain::graph::Graph;
use crate::domain::traits::SpanningTreeBuilder;
use crate::infrastructure::dijkstra::DijkstraShortestPath;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::fixtures::{load_fixture, FIXTURE_NAMES};
use crate::infrastructure::mst_kruskal::KruskalMst;
use crate::infrastructure::mst_prim::PrimMst;
use crate::infrastructure::path_dfs::DfsPathFinder;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::infrastructure::serde_json_adapter::{read_graph_file, write_graph_file, GraphFileDto};
use crate::infrastructure::wcc_dfs::DfsWccDetector;
use crate::interface::render;
use crate::usecase::analyze::{
    analyze_components, announce_graph, check_reachability, compute_spanning_trees,
    find_shortest_path, resolve_vertex, traverse_inorder,
};
use crate::usecase::build::build_graph;
use crate::usecase::event::{AppEvent, EventSink};
use crate::usecase::validate::validate_graph;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;
    tracing::debug!(?cmd, "parsed command line");

    match cmd {
        Cli::Validate { input } => {
            let dto = read_graph_file(&input)
                .await
                .with_context(|| format!("reading graph file: {input}"))?;
            eprintln!("schema validation passed");

            let summary =
                validate_graph(&dto).with_context(|| format!("validating graph: {input}"))?;
            println!("{}", render::render_summary(&summary));
            eprintln!("ok: graph validated");
            Ok(())
        }

        Cli::Convert { input, output } => {
            if is_same_file(&input, &output) {
                return Err(anyhow!("refusing to overwrite input: {input}"));
            }
            let dto = read_graph_file(&input)
                .await
                .with_context(|| format!("reading graph file: {input}"))?;
            let graph = build_graph(&dto).context("building graph")?;
            let out = GraphFileDto::from_graph(&graph, dto.name.clone());
            write_graph_file(&output, &out)
                .await
                .with_context(|| format!("writing graph file: {output}"))?;
            eprintln!(
                "summary: wrote {} vertices and {} edges to {output}",
                graph.node_count(),
                graph.edge_count()
            );
            Ok(())
        }

        Cli::Analyze {
            source,
            command,
            emit_events,
        } => {
            let graph = load_graph(&source).await?;
            let (sink, printer) = event_sink(emit_events);
            announce_graph(&graph, &sink).await;

            let report = run_analysis(&graph, &command, &sink).await;

            // Close the channel so the printer drains and exits.
            drop(sink);
            if let Some(handle) = printer {
                handle.await.ok();
            }

            let report = report?;
            if emit_events {
                eprintln!("{report}");
            } else {
                println!("{report}");
            }
            Ok(())
        }
    }
}

async fn run_analysis(graph: &Graph, command: &Analysis, sink: &EventSink) -> Result<String> {
    match command {
        Analysis::Reach { from, to } => {
            let report = check_reachability(graph, &DfsPathFinder, from, to, sink).await?;
            Ok(render::render_reach(graph, &report))
        }
        Analysis::Components => {
            let report =
                analyze_components(graph, &KosarajuSccDetector, &DfsWccDetector, sink).await;
            Ok(render::render_components(graph, &report))
        }
        Analysis::ShortestPath { from, to } => {
            let report = find_shortest_path(graph, &DijkstraShortestPath, from, to, sink).await?;
            Ok(render::render_shortest_path(graph, &report))
        }
        Analysis::Mst { root } => {
            let prim = PrimMst::new(resolve_vertex(graph, root, "root")?);
            let builders: [&dyn SpanningTreeBuilder; 2] = [&prim, &KruskalMst];
            let trees = compute_spanning_trees(graph, &builders, sink).await;
            Ok(render::render_spanning_trees(graph, &trees))
        }
        Analysis::Inorder { from } => {
            let report = traverse_inorder(graph, from, sink).await?;
            Ok(render::render_inorder(graph, &report))
        }
        Analysis::Matrix => Ok(render::render_matrix(graph)),
    }
}

async fn load_graph(source: &GraphSource) -> Result<Graph> {
    let dto = match source {
        GraphSource::File(path) => read_graph_file(path)
            .await
            .with_context(|| format!("reading graph file: {path}"))?,
        GraphSource::Fixture(name) => load_fixture(name)?,
    };
    let graph = build_graph(&dto).context("building graph")?;
    Ok(graph)
}

fn event_sink(emit_events: bool) -> (EventSink, Option<JoinHandle<()>>) {
    if !emit_events {
        return (None, None);
    }
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    (Some(tx), Some(spawn_ndjson_printer(rx)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum GraphSource {
    File(String),
    Fixture(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Analysis {
    Reach { from: String, to: String },
    Components,
    ShortestPath { from: String, to: String },
    Mst { root: String },
    Inorder { from: String },
    Matrix,
}

#[derive(Debug)]
enum Cli {
    Analyze {
        source: GraphSource,
        command: Analysis,
        emit_events: bool,
    },
    Validate {
        input: String,
    },
    Convert {
        input: String,
        output: String,
    },
}

#[derive(Debug, Default)]
struct Options {
    input: Option<String>,
    fixture: Option<String>,
    output: Option<String>,
    from: Option<String>,
    to: Option<String>,
    root: Option<String>,
    emit_events: bool,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> graph <command> [options]
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "graph" {
            return Err(anyhow!(usage()));
        }

        let command = args[2].as_str();
        let allowed: &[&str] = match command {
            "reach" | "shortest-path" => &["--in", "--fixture", "--from", "--to", "--emit-events"],
            "components" => &["--in", "--fixture", "--emit-events"],
            "mst" => &["--in", "--fixture", "--root", "--emit-events"],
            "inorder" => &["--in", "--fixture", "--from"],
            "matrix" => &["--in", "--fixture"],
            "validate" => &["--in"],
            "convert" => &["--in", "--out"],
            _ => return Err(anyhow!(usage())),
        };
        let opts = parse_options(&args[3..], allowed)?;

        match command {
            "validate" => Ok(Cli::Validate {
                input: require(opts.input, "--in/--input")?,
            }),
            "convert" => Ok(Cli::Convert {
                input: require(opts.input, "--in/--input")?,
                output: require(opts.output, "--out/--output")?,
            }),
            _ => {
                let source = graph_source(opts.input, opts.fixture)?;
                let analysis = match command {
                    "reach" => Analysis::Reach {
                        from: require(opts.from, "--from")?,
                        to: require(opts.to, "--to")?,
                    },
                    "shortest-path" => Analysis::ShortestPath {
                        from: require(opts.from, "--from")?,
                        to: require(opts.to, "--to")?,
                    },
                    "components" => Analysis::Components,
                    "mst" => Analysis::Mst {
                        root: require(opts.root, "--root")?,
                    },
                    "inorder" => Analysis::Inorder {
                        from: require(opts.from, "--from")?,
                    },
                    _ => Analysis::Matrix,
                };
                Ok(Cli::Analyze {
                    source,
                    command: analysis,
                    emit_events: opts.emit_events,
                })
            }
        }
    }
}

fn parse_options(args: &[String], allowed: &[&str]) -> Result<Options> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        let flag = match args[i].as_str() {
            "--input" => "--in",
            "--output" => "--out",
            "-h" | "--help" => return Err(anyhow!(usage())),
            other => other,
        };
        if !allowed.contains(&flag) {
            return Err(anyhow!(format!("unknown arg: {}\n\n{}", args[i], usage())));
        }

        if flag == "--emit-events" {
            opts.emit_events = true;
            i += 1;
            continue;
        }

        i += 1;
        let value = args
            .get(i)
            .cloned()
            .ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))?;
        let slot = match flag {
            "--in" => &mut opts.input,
            "--fixture" => &mut opts.fixture,
            "--out" => &mut opts.output,
            "--from" => &mut opts.from,
            "--to" => &mut opts.to,
            _ => &mut opts.root,
        };
        *slot = Some(value);
        i += 1;
    }

    Ok(opts)
}

fn require(value: Option<String>, flag: &str) -> Result<String> {
    value.ok_or_else(|| anyhow!(format!("missing {flag}\n\n{}", usage())))
}

fn graph_source(input: Option<String>, fixture: Option<String>) -> Result<GraphSource> {
    match (input, fixture) {
        (Some(path), None) => Ok(GraphSource::File(path)),
        (None, Some(name)) => Ok(GraphSource::Fixture(name)),
        (Some(_), Some(_)) => Err(anyhow!(format!(
            "--in and --fixture are mutually exclusive\n\n{}",
            usage()
        ))),
        (None, None) => Err(anyhow!(format!(
            "missing --in/--input or --fixture\n\n{}",
            usage()
        ))),
    }
}

fn usage() -> String {
    format!(
        "Usage:\n  graph reach         <source> --from <v> --to <v> [--emit-events]\n  graph components    <source> [--emit-events]\n  graph shortest-path <source> --from <v> --to <v> [--emit-events]\n  graph mst           <source> --root <v> [--emit-events]\n  graph inorder       <source> --from <v>\n  graph matrix        <source>\n  graph validate      --in/--input <graph.json>\n  graph convert       --in/--input <graph.json> --out/--output <graph.json>\n\nSource:\n  --in/--input <graph.json> or --fixture <{}>\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; the report goes to stderr.",
        FIXTURE_NAMES.join("|")
    )
}

fn is_same_file(a: &str, b: &str) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| PathBuf::from(a));
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| PathBuf::from(b));
    a == b
}

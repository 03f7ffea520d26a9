use criterion::{criterion_group, criterion_main, Criterion};
use graphql_schema_index::SchemaIndex;
use graphql_typer::DocumentTyper;
use graphql_typer_test_utils::{first_operation, fixtures, parse_document, parse_index};
use std::hint::black_box;

// A wider operation than the shared fixtures, to keep the traversal itself
// (rather than parsing) the dominant cost.
const WIDE_OPERATION: &str = r#"
query Wide {
    user(id: "1") {
        id
        name
        posts {
            id
            title
            comments {
                id
                text
            }
        }
    }
    post(id: "2") {
        id
        title
        comments {
            text
        }
    }
}
"#;

fn bench_schema_index_build(c: &mut Criterion) {
    c.bench_function("schema_index_build", |b| {
        b.iter(|| SchemaIndex::from_sdl(black_box(fixtures::NESTED_SCHEMA)));
    });
}

fn bench_type_operation(c: &mut Criterion) {
    let index = parse_index(fixtures::NESTED_SCHEMA);
    let document = parse_document(WIDE_OPERATION);
    let operation = first_operation(&document);

    c.bench_function("type_wide_operation", |b| {
        b.iter(|| DocumentTyper::new(&index).type_operation(black_box(operation)));
    });
}

fn bench_type_input_heavy_operation(c: &mut Criterion) {
    let index = parse_index(fixtures::INPUT_SCHEMA);
    let document = parse_document(
        "query Search($a: SearchFilter, $b: SearchFilter, $c: SearchFilter) { search(filter: $a) { score } }",
    );
    let operation = first_operation(&document);

    c.bench_function("type_input_heavy_operation", |b| {
        b.iter(|| DocumentTyper::new(&index).type_operation(black_box(operation)));
    });
}

criterion_group!(
    benches,
    bench_schema_index_build,
    bench_type_operation,
    bench_type_input_heavy_operation
);
criterion_main!(benches);

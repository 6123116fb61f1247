use canvas_typegen_codegen::{generate, render_document, TypeCatalog};
use canvas_typegen_schema::{ComponentRecord, ParameterDeclaration, SlotDeclaration};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn component_set(count: usize) -> Vec<ComponentRecord> {
    (0..count)
        .map(|i| {
            ComponentRecord::new(format!("component-{}", i))
                .with_parameter(ParameterDeclaration::new("title", "text"))
                .with_parameter(ParameterDeclaration::new("body", "richText"))
                .with_parameter(
                    ParameterDeclaration::new("links", "array")
                        .with_type_config(json!({ "itemType": "link" })),
                )
                .with_parameter(
                    ParameterDeclaration::new("target", "contentReference").with_type_config(
                        json!({ "allowedContentTypes": [{ "id": "page" }, { "id": "article" }] }),
                    ),
                )
                .with_slot(SlotDeclaration::new("content"))
        })
        .collect()
}

fn generate_small_set(c: &mut Criterion) {
    let records = component_set(10);
    let catalog = TypeCatalog::default();

    c.bench_function("generate_10_components", |b| {
        b.iter(|| generate(black_box(&records), &catalog))
    });
}

fn generate_and_render_large_set(c: &mut Criterion) {
    let records = component_set(500);
    let catalog = TypeCatalog::default();

    c.bench_function("generate_render_500_components", |b| {
        b.iter(|| {
            let writer = generate(black_box(&records), &catalog).unwrap();
            render_document("components", &writer)
        })
    });
}

criterion_group!(benches, generate_small_set, generate_and_render_large_set);
criterion_main!(benches);

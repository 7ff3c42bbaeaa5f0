//! Loading the catalog from disk, including the bundled datasets.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use scan_catalog::{Catalog, CatalogError};
use scan_config::CatalogConfig;

fn bundled(file: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../datasets")
        .join(file)
        .display()
        .to_string()
}

#[tokio::test]
async fn loads_bundled_datasets() {
    let config = CatalogConfig {
        diseases: bundled("diseases.csv"),
        symptoms: bundled("symptoms.csv"),
    };
    let catalog = Catalog::load(&config).await.expect("bundled catalog loads");

    assert!(catalog.diseases().len() >= 5);
    let cold = catalog.disease(0).expect("first row");
    assert_eq!(cold.name, "Common Cold");
    assert_eq!(cold.index, 0);
    assert_eq!(cold.symptom_list().len(), 5);

    // Every checklist symptom has an explanation row.
    for disease in catalog.diseases() {
        for symptom in disease.symptom_list() {
            assert!(
                catalog.symptom_named(&symptom).is_some(),
                "{} lists '{symptom}' which has no symptom row",
                disease.name
            );
        }
    }
}

#[tokio::test]
async fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.csv").display().to_string();
    let config = CatalogConfig {
        diseases: missing.clone(),
        symptoms: missing,
    };

    let err = Catalog::load(&config).await.expect_err("should fail");
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[tokio::test]
async fn loads_tables_written_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let diseases = dir.path().join("diseases.csv");
    let symptoms = dir.path().join("symptoms.csv");
    std::fs::write(
        &diseases,
        "Disease,General Symptoms,Symptoms,Description,Recommendation\n\
         Flu,\"fever and chills\",\"fever, chills\",Influenza.,Rest.\n",
    )
    .expect("write diseases");
    std::fs::write(&symptoms, "Symptom,Explanation\nFever,Hot\nChills,Cold\n")
        .expect("write symptoms");

    let catalog = Catalog::load(&CatalogConfig {
        diseases: diseases.display().to_string(),
        symptoms: symptoms.display().to_string(),
    })
    .await
    .expect("loads");

    assert_eq!(catalog.diseases().len(), 1);
    assert_eq!(
        catalog.symptom_named("  chills ").map(|s| s.index),
        Some(1)
    );
}

#[test]
fn rendered_csv_parses_back_to_the_same_table() {
    let diseases = "Disease,General Symptoms,Symptoms,Description,Recommendation\n\
                    \"Cold, common\",\"runny nose\",\"runny nose, coughing\",\"A \"\"mild\"\" virus\",Rest\n";
    let catalog =
        Catalog::from_csv(diseases.as_bytes(), "Symptom,Explanation\nCoughing,x\n".as_bytes())
            .expect("parses");

    let rendered = catalog.diseases_csv().expect("renders");
    let reparsed =
        Catalog::from_csv(rendered.as_bytes(), "Symptom,Explanation\nCoughing,x\n".as_bytes())
            .expect("reparses");
    assert_eq!(reparsed.diseases(), catalog.diseases());
}

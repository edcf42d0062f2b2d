use patrimoine::config::TextGenConfig;
use patrimoine::core::Language;
use patrimoine::core::textgen::TextGenClient;

#[tokio::test]
async fn unconfigured_collaborator_degrades_to_a_fixed_message() {
    let client = TextGenClient::new(&TextGenConfig::default());

    let fr = client
        .generate("Demande de recensement", Language::Fr, None)
        .await;
    assert_eq!(fr, "Service IA indisponible (Clé API manquante).");

    let ar = client
        .generate("Demande de recensement", Language::Ar, Some("contexte"))
        .await;
    assert_eq!(ar, "خدمة الذكاء الاصطناعي غير متاحة (مفتاح API مفقود).");
}

use spamfilter::{parse_tsv, send_message, serve_once, Classifier, Label, ServiceConfig};
use env_logger::{Builder, Env};
use tokio::net::TcpListener;

// Initialize test logger
fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .try_init();
}

const DATASET: &str = "\
Gana dinero desde casa\t1
Oferta exclusiva, premio gratis\t1
Haz click para reclamar tu premio\t1
Hola, nos vemos mañana en clase\t0
La reunión es a las tres\t0
Gracias por la cena de ayer\t0
";

fn trained_classifier() -> Classifier {
    let mut classifier = Classifier::new();
    classifier.train(&parse_tsv(DATASET));
    classifier
}

#[test]
fn test_end_to_end_classification() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let classifier = trained_classifier();

    assert_eq!(classifier.classify("reclamar premio gratis")?, Label::Spam);
    assert_eq!(classifier.classify("gracias por la clase")?, Label::NotSpam);

    let (label, scores) = classifier.predict("dinero gratis")?;
    assert_eq!(label, Label::Spam);
    assert!(scores.contains_key(&Label::Spam));
    assert!(scores.contains_key(&Label::NotSpam));
    Ok(())
}

#[tokio::test]
async fn test_service_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let classifier = trained_classifier();
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let client = tokio::spawn(async move { send_message(addr, "premio gratis").await });
    let classification = serve_once(&listener, &classifier).await?;
    let reply = client.await??;

    assert_eq!(classification.message, "premio gratis");
    assert_eq!(classification.label, Label::Spam);
    assert!(classification.scores.spam > classification.scores.not_spam);
    assert_eq!(reply, Label::Spam);
    Ok(())
}

#[test]
fn test_default_config_address() {
    let config = ServiceConfig::default();
    assert!(config.listen_addr.parse::<std::net::SocketAddr>().is_ok());
}

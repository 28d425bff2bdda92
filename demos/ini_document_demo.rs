use std::error::Error;

use env_logger::Env;
use log::info;
use yaip::IniDocument;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("debug"));

    // Create example INI content
    let ini_content = r#"
; keys before the first header live in the unnamed section
version=2

[General]
api_mode=false
api_access_token=password ; keep this secret
default_url=
enable_insert=true

[Proxy]
test=trojan,example.com,443,password,tls-verification=false
test2=vmess,example.org,8080,uuid=00000000-0000-0000-0000-000000000000

[Empty Section]
"#;

    let mut document = IniDocument::new();
    document.parse(ini_content);

    // Sections come back alphabetically, the empty one is gone
    println!("Sections: {:?}", document.list_sections());
    println!("Keys in [general]: {:?}", document.list_keys("general"));

    // Empty values fall back to the default
    println!("API mode: {}", document.get_value("General", "api_mode", true)?);
    println!(
        "Default URL: {}",
        document.get("General", "default_url", "http://localhost")
    );

    // Modify values
    document.set("Proxy", "test3", "ss,example.net,8388,password");
    document.set_value("General", "listen_port", 25500u16);
    document.key_delete("Proxy", "test2");

    let path = std::env::temp_dir().join("ini_document_demo.ini");
    document.save_file(&path)?;
    info!("Saved demo document to {}", path.display());

    let reloaded = IniDocument::from_file(&path)?;
    println!("\nReloaded INI:\n{}", reloaded);

    Ok(())
}

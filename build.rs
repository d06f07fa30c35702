use dotenvy::dotenv;

const FORWARDED: [&str; 2] = ["POLYFACTS_BASE_PATH", "POLYFACTS_LOG_LEVEL"];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // the .env file is optional, defaults apply when it is missing
  let _ = dotenv();

  for name in FORWARDED {
    println!("cargo::rerun-if-env-changed={}", name);
    if let Ok(value) = std::env::var(name) {
      println!("cargo::rustc-env={}={}", name, value);
    }
  }
}

mod run;

use std::env;

fn main() -> Result<(), String> {
  let args: Vec<String> = env::args().collect();
  if args.len() < 3 {
    usage();
  }
  match args[1].as_str() {
    "tokens" => run::tokens(&args[2]),
    "tree" => run::tree(&args[2]),
    "compile" => {
      let mut input = None;
      let mut output = None;
      let mut i = 2;
      while i < args.len() {
        if args[i] == "-o" {
          i += 1;
          if i < args.len() {
            output = Some(args[i].clone());
            i += 1;
          }
        } else {
          input = Some(args[i].clone());
          i += 1;
        }
      }
      let inp = input.ok_or("weft compile <input.weft> -o <output.weftc>")?;
      let out = output.ok_or("weft compile <input.weft> -o <output.weftc>")?;
      run::compile(&inp, &out)
    }
    _ => usage(),
  }
}

fn usage() -> ! {
  eprintln!("Usage: weft tokens <file.weft>");
  eprintln!("       weft tree <file.weft>");
  eprintln!("       weft compile <file.weft> -o <file.weftc>");
  std::process::exit(1);
}

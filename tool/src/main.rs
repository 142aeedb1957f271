use std::process::ExitCode;

use ccmp::{
    parse_request, parse_response, serialize_request, serialize_response, CcmpError,
    NamespaceMap, RequestPayload, ResponsePayload,
};
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Kind {
    /// Decide from the document element name.
    Auto,
    Request,
    Response,
}

#[derive(Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(value_parser, help = "The CCMP document to read")]
    input: String,

    #[clap(long, default_value = "auto", value_enum)]
    kind: Kind,

    #[clap(long, help = "Re-emit the bound document on stdout")]
    roundtrip: bool,

    #[clap(
        long,
        help = "Verify serialize-then-reparse yields an equal model; print nothing on success"
    )]
    check: bool,
}

enum Bound {
    Request(ccmp::CcmpRequest),
    Response(ccmp::CcmpResponse),
}

fn bind(text: &str, kind: Kind) -> Result<Bound, CcmpError> {
    match kind {
        Kind::Request => parse_request(text).map(Bound::Request),
        Kind::Response => parse_response(text).map(Bound::Response),
        Kind::Auto => {
            let doc = roxmltree::Document::parse(text)?;
            match doc.root_element().tag_name().name() {
                "ccmpResponse" => parse_response(text).map(Bound::Response),
                _ => parse_request(text).map(Bound::Request),
            }
        }
    }
}

fn request_summary(request: &ccmp::CcmpRequest) -> String {
    let kind = match &request.payload {
        RequestPayload::Options => "options",
        RequestPayload::Blueprints(_) => "blueprints",
        RequestPayload::Blueprint(_) => "blueprint",
        RequestPayload::Confs(_) => "confs",
        RequestPayload::Conf(_) => "conf",
        RequestPayload::Users(_) => "users",
        RequestPayload::User(_) => "user",
        RequestPayload::SidebarsByVal(_) => "sidebarsByVal",
        RequestPayload::SidebarsByRef(_) => "sidebarsByRef",
        RequestPayload::SidebarByVal(_) => "sidebarByVal",
        RequestPayload::SidebarByRef(_) => "sidebarByRef",
        RequestPayload::Extended(_) => "extended",
    };
    let operation = request
        .operation
        .value()
        .map(|op| op.to_string())
        .unwrap_or_else(|| "-".to_string());
    let user = request.conf_user_id.value().map(String::as_str).unwrap_or("-");
    let object = request.conf_obj_id.value().map(String::as_str).unwrap_or("-");
    format!("request {kind}: operation={operation} confUserID={user} confObjID={object}")
}

fn response_summary(response: &ccmp::CcmpResponse) -> String {
    let kind = match &response.payload {
        ResponsePayload::Options(_) => "options",
        ResponsePayload::Blueprints(_) => "blueprints",
        ResponsePayload::Blueprint(_) => "blueprint",
        ResponsePayload::Confs(_) => "confs",
        ResponsePayload::Conf(_) => "conf",
        ResponsePayload::Users(_) => "users",
        ResponsePayload::User(_) => "user",
        ResponsePayload::SidebarsByVal(_) => "sidebarsByVal",
        ResponsePayload::SidebarsByRef(_) => "sidebarsByRef",
        ResponsePayload::SidebarByVal(_) => "sidebarByVal",
        ResponsePayload::SidebarByRef(_) => "sidebarByRef",
        ResponsePayload::Extended(_) => "extended",
    };
    format!(
        "response {kind}: code={} confUserID={}",
        response.response_code, response.conf_user_id
    )
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&cli.input)?;
    let bound = bind(&text, cli.kind)?;
    let namespaces = NamespaceMap::ccmp();

    if cli.check {
        match &bound {
            Bound::Request(request) => {
                let reparsed = parse_request(&serialize_request(request, &namespaces)?)?;
                if reparsed != *request {
                    return Err("round-trip produced a different request model".into());
                }
            }
            Bound::Response(response) => {
                let reparsed = parse_response(&serialize_response(response, &namespaces)?)?;
                if reparsed != *response {
                    return Err("round-trip produced a different response model".into());
                }
            }
        }
        return Ok(());
    }

    if cli.roundtrip {
        let echoed = match &bound {
            Bound::Request(request) => serialize_request(request, &namespaces)?,
            Bound::Response(response) => serialize_response(response, &namespaces)?,
        };
        println!("{echoed}");
    } else {
        match &bound {
            Bound::Request(request) => println!("{}", request_summary(request)),
            Bound::Response(response) => println!("{}", response_summary(response)),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}: {error}", cli.input);
            ExitCode::FAILURE
        }
    }
}

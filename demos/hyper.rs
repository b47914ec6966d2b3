use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use pathmux::{BoxedHandler, Params, Router};
use tokio::net::TcpListener;

// GET /
async fn index(_req: Request<Incoming>, _params: Params) -> Response<Full<Bytes>> {
    Response::new(Full::from("Hello, world!"))
}

// GET /:username
async fn user(_req: Request<Incoming>, params: Params) -> Response<Full<Bytes>> {
    let username = params.get("username").unwrap_or_default();
    Response::new(Full::from(format!("Hello, {username}!")))
}

// GET /:username/:repo
async fn repo(_req: Request<Incoming>, params: Params) -> Response<Full<Bytes>> {
    let username = params.get("username").unwrap_or_default();
    let repo = params.get("repo").unwrap_or_default();
    Response::new(Full::from(format!("{username} owns {repo}")))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a router and register our routes.
    let mut router: Router<BoxedHandler<Incoming>> = Router::new();

    router.handle_func("/", index)?;
    router.handle_func("/:username", user)?;
    // normalized to `/:username/:repo`
    router.handle_func("/:username//////:repo", repo)?;

    println!("{:?}", router);

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;

    // the router can no longer be modified once it is turned into a service
    let service = router.into_service();

    loop {
        let service = service.clone();
        let (tcp, _) = listener.accept().await?;
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(TokioIo::new(tcp), service)
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}

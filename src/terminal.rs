use crate::matcher::{ApplicationForm, MatchSession, NgoMatch};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, instrument};

/// Drives a matching session from line based input until the input ends or an empty address
/// is entered.
#[instrument(skip_all)]
pub async fn run<R, W>(session: &mut MatchSession, input: R, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        let Some(address) = prompt(&mut lines, output, "Your address (empty to quit): ").await? else {
            return Ok(());
        };
        if address.is_empty() {
            return Ok(());
        }

        match session.find_nearest_ngo(&address).await {
            Ok(ngo_match) => {
                let location = session.user_location();
                debug!(lat = location.lat, lon = location.lon, "Resolved address");
                write_message(session, output).await?;
                write_match(&ngo_match, output).await?;
            }
            Err(e) => {
                debug!("Search failed: {}", e);
                write_message(session, output).await?;
                continue;
            }
        }

        let question = match session.current_match() {
            Some(current_match) => format!("Apply to {}? [y/N]: ", current_match.ngo.name),
            None => "Apply? [y/N]: ".to_string(),
        };
        let Some(answer) = prompt(&mut lines, output, &question).await? else {
            return Ok(());
        };
        if !answer.eq_ignore_ascii_case("y") {
            continue;
        }

        let Some(form) = read_form(&mut lines, output).await? else {
            return Ok(());
        };
        if let Err(e) = session.apply(&form).await {
            debug!("Application failed: {}", e);
        }
        write_message(session, output).await?;
    }
}

async fn read_form<R, W>(lines: &mut Lines<R>, output: &mut W) -> io::Result<Option<ApplicationForm>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(name) = prompt(lines, output, "Name: ").await? else {
        return Ok(None);
    };
    let Some(phone) = prompt(lines, output, "Phone: ").await? else {
        return Ok(None);
    };
    let Some(skills) = prompt(lines, output, "Skills (comma separated): ").await? else {
        return Ok(None);
    };
    let Some(availability) = prompt(lines, output, "Availability: ").await? else {
        return Ok(None);
    };

    Ok(Some(ApplicationForm {
        name,
        phone,
        skills,
        availability,
    }))
}

async fn prompt<R, W>(lines: &mut Lines<R>, output: &mut W, text: &str) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

async fn write_match<W: AsyncWrite + Unpin>(ngo_match: &NgoMatch, output: &mut W) -> io::Result<()> {
    let ngo = &ngo_match.ngo;
    let mut text = format!("\n  {}\n", ngo.name);
    if !ngo.address.is_empty() {
        text.push_str(&format!("  Address: {}\n", ngo.address));
    }
    text.push_str(&format!("  Skills needed: {}\n", ngo.skills_needed.join(", ")));
    text.push_str(&format!("  Time commitment: {}\n", ngo.time_commitment));
    text.push_str(&format!("  Estimated travel time: {}\n\n", ngo_match.travel_time));

    output.write_all(text.as_bytes()).await
}

async fn write_message<W: AsyncWrite + Unpin>(session: &MatchSession, output: &mut W) -> io::Result<()> {
    if let Some(message) = session.message() {
        output.write_all(format!("{}\n", message).as_bytes()).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::backend::VolunteerBackend;
    use crate::directory::NgoDirectory;
    use crate::domain::{Coordinate, Ngo};
    use crate::matcher::SessionState;
    use crate::nominatim::NominatimGeocoder;
    use crate::openroute::OpenRouteService;
    use mockito::Matcher;
    use reqwest::Client;
    use std::sync::Arc;
    use test_log::test;

    fn session_for(server: &mockito::ServerGuard) -> MatchSession {
        let config = Arc::new(
            AppConfigBuilder::new()
                .geocoding_url(server.url())
                .routing_url(server.url())
                .backend_url(server.url())
                .build(),
        );
        let directory = Arc::new(NgoDirectory::new(vec![Ngo {
            name: "Teach for India".to_string(),
            location: Coordinate::new(19.076, 72.8777),
            address: "Worli, Mumbai".to_string(),
            skills_needed: vec!["teaching".to_string(), "mentoring".to_string()],
            time_commitment: "weekends".to_string(),
        }]));

        MatchSession::new(
            directory,
            Arc::new(NominatimGeocoder::new(Client::new(), config.clone())),
            Arc::new(OpenRouteService::new(Client::new(), config.clone())),
            Arc::new(VolunteerBackend::new(Client::new(), config)),
        )
    }

    async fn mock_search(server: &mut mockito::ServerGuard) -> mockito::Mock {
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../tests/resources/nominatim/search_response.json"))
            .create_async()
            .await
    }

    #[test(tokio::test)]
    async fn prints_the_match_and_stops_on_an_empty_address() -> io::Result<()> {
        let mut server = mockito::Server::new_async().await;
        let search = mock_search(&mut server).await;
        server
            .mock("POST", "/v2/directions/driving-car")
            .with_status(500)
            .create_async()
            .await;

        let mut session = session_for(&server);
        let mut output = Vec::new();
        run(&mut session, "Worli\nn\n\n".as_bytes(), &mut output).await?;

        let output = String::from_utf8_lossy(&output);
        search.assert();
        assert!(output.contains("Nearest NGO found!"), "unexpected output: {}", output);
        assert!(output.contains("Skills needed: teaching, mentoring"));
        assert!(output.contains("Time commitment: weekends"));
        assert!(output.contains("Estimated travel time: Travel time not available"));
        assert_eq!(session.state(), SessionState::Matched);

        Ok(())
    }

    #[test(tokio::test)]
    async fn applies_with_the_entered_details() -> io::Result<()> {
        let mut server = mockito::Server::new_async().await;
        mock_search(&mut server).await;
        server
            .mock("POST", "/v2/directions/driving-car")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../tests/resources/openroute/directions_response.json"))
            .create_async()
            .await;
        server
            .mock("GET", "/reverse")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;
        let volunteer = server
            .mock("POST", "/api/volunteer")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "name": "Asha",
                "skills": ["teaching", "design"],
                "location": "Address not available",
                "appliedNGO": "Teach for India"
            })))
            .with_status(201)
            .create_async()
            .await;

        let mut session = session_for(&server);
        let mut output = Vec::new();
        let input = "Worli\ny\nAsha\n555-0100\nteaching, design\nweekends\n";
        run(&mut session, input.as_bytes(), &mut output).await?;

        let output = String::from_utf8_lossy(&output);
        volunteer.assert();
        assert!(output.contains("Estimated travel time: 2 minutes"), "unexpected output: {}", output);
        assert!(output.contains("You have successfully applied!"));
        assert_eq!(session.state(), SessionState::Applied);

        Ok(())
    }

    #[test(tokio::test)]
    async fn reports_an_unknown_address_and_keeps_going() -> io::Result<()> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let mut session = session_for(&server);
        let mut output = Vec::new();
        run(&mut session, "Atlantis\n".as_bytes(), &mut output).await?;

        let output = String::from_utf8_lossy(&output);
        assert!(output.contains("Failed to find your location. Please check your address and try again."));
        assert_eq!(output.matches("Your address").count(), 2);
        assert_eq!(session.state(), SessionState::Error);

        Ok(())
    }
}
